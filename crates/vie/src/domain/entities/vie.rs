//! Vie - Labeled record with an initial count
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Vie - persisted record, `id` assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vie {
    pub id: i64,
    pub label: String,
    pub initial_count: Option<i32>,
}

/// Payload for a Vie that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVie {
    pub label: String,
    pub initial_count: Option<i32>,
}

impl NewVie {
    pub fn new(label: impl Into<String>, initial_count: Option<i32>) -> Self {
        Self {
            label: label.into(),
            initial_count,
        }
    }

    /// Attach the id assigned by the store
    pub fn with_id(self, id: i64) -> Vie {
        Vie {
            id,
            label: self.label,
            initial_count: self.initial_count,
        }
    }
}

impl Vie {
    /// Copy the mutable fields of `changes` onto this record, keeping `id`
    pub fn apply(&mut self, changes: &Vie) {
        self.label = changes.label.clone();
        self.initial_count = changes.initial_count;
    }
}

impl std::fmt::Display for Vie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vie{{id={}, label='{}', initial_count={:?}}}",
            self.id, self.label, self.initial_count
        )
    }
}
