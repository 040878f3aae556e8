//! Vie Domain Library
//!
//! Core domain types and interfaces for the Vie record service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Vie, NewVie)
//!   - `value_objects/`: Immutable value types (Label)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Use case interfaces consumed by the HTTP layer
//!
//! # Usage
//!
//! ```rust,ignore
//! use vie::{NewVie, Vie, VieOperations, VieRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Label, NewVie, Vie, LABEL_MAX_LEN};
pub use ports::{VieOperations, VieRepository};
