//! Vie DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vie::Vie;

// ============================================
// Request/Response DTOs
// ============================================

/// Body of a create or update request.
///
/// `id` is accepted for compatibility but ignored: the store assigns it on
/// create and the path supplies it on update.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct VieRequest {
    #[allow(dead_code)]
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub initial_count: Option<i32>,
}

/// Vie response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VieResponse {
    pub id: i64,
    pub label: String,
    pub initial_count: Option<i32>,
}

impl From<Vie> for VieResponse {
    fn from(vie: Vie) -> Self {
        Self {
            id: vie.id,
            label: vie.label,
            initial_count: vie.initial_count,
        }
    }
}

/// Error body returned with every 4xx/5xx
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Success body for deletions
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Count body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: i64,
}
