//! Vie Routes - Record Management
//!
//! HTTP handlers that delegate to the injected `VieOperations`. Every
//! failure is answered with an `{"error": ...}` JSON body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use vie::{DomainError, Label, NewVie, Vie};

use crate::models::{CountResponse, ErrorResponse, MessageResponse, VieRequest, VieResponse};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

fn not_found(id: impl std::fmt::Display) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        format!("Vie not found with id: {}", id),
    )
}

/// Map a domain error to a status code; `action` prefixes 500 messages
fn domain_error(action: &str, e: DomainError) -> ApiError {
    match e {
        DomainError::Validation(message) => api_error(StatusCode::BAD_REQUEST, message),
        DomainError::NotFound { id, .. } => not_found(id),
        _ => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error {}: {}", action, e),
        ),
    }
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.body_text()))
}

fn body(payload: Result<Json<VieRequest>, JsonRejection>) -> Result<VieRequest, ApiError> {
    payload
        .map(|Json(request)| request)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.body_text()))
}

/// List all Vies
#[utoipa::path(
    get,
    path = "/vies",
    responses(
        (status = 200, description = "List of all Vies", body = Vec<VieResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Vie"
)]
pub async fn list_vies(
    State(state): State<AppState>,
) -> Result<Json<Vec<VieResponse>>, ApiError> {
    let vies = state
        .vie_service
        .find_all()
        .await
        .map_err(|e| domain_error("fetching vies", e))?;

    Ok(Json(vies.into_iter().map(Into::into).collect()))
}

/// Create new Vie
#[utoipa::path(
    post,
    path = "/vies",
    request_body = VieRequest,
    responses(
        (status = 201, description = "Vie created", body = VieResponse),
        (status = 400, description = "Missing or invalid label", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Vie"
)]
pub async fn create_vie(
    State(state): State<AppState>,
    payload: Result<Json<VieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VieResponse>), ApiError> {
    let request = body(payload)?;
    let label = Label::parse(request.label).map_err(|e| domain_error("creating vie", e))?;

    let vie = state
        .vie_service
        .create(NewVie::new(label.into_inner(), request.initial_count))
        .await
        .map_err(|e| domain_error("creating vie", e))?;

    Ok((StatusCode::CREATED, Json(vie.into())))
}

/// Count Vies
#[utoipa::path(
    get,
    path = "/vies/count",
    responses(
        (status = 200, description = "Number of stored Vies", body = CountResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Vie"
)]
pub async fn count_vies(State(state): State<AppState>) -> Result<Json<CountResponse>, ApiError> {
    let count = state
        .vie_service
        .count()
        .await
        .map_err(|e| domain_error("counting vies", e))?;

    Ok(Json(CountResponse { count }))
}

/// Get Vie by ID
#[utoipa::path(
    get,
    path = "/vies/{id}",
    params(("id" = i64, Path, description = "Vie ID")),
    responses(
        (status = 200, description = "Vie found", body = VieResponse),
        (status = 404, description = "Vie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Vie"
)]
pub async fn get_vie(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<VieResponse>, ApiError> {
    let id = path_id(path)?;

    let vie = state
        .vie_service
        .find_by_id(id)
        .await
        .map_err(|e| domain_error("fetching vie", e))?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(vie.into()))
}

/// Update Vie
#[utoipa::path(
    put,
    path = "/vies/{id}",
    params(("id" = i64, Path, description = "Vie ID")),
    request_body = VieRequest,
    responses(
        (status = 200, description = "Vie updated", body = VieResponse),
        (status = 400, description = "Missing or invalid label", body = ErrorResponse),
        (status = 404, description = "Vie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Vie"
)]
pub async fn update_vie(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<VieRequest>, JsonRejection>,
) -> Result<Json<VieResponse>, ApiError> {
    let id = path_id(path)?;
    let request = body(payload)?;
    let label = Label::parse(request.label).map_err(|e| domain_error("updating vie", e))?;

    // The path id wins over any id in the body
    let vie = state
        .vie_service
        .update(Vie {
            id,
            label: label.into_inner(),
            initial_count: request.initial_count,
        })
        .await
        .map_err(|e| domain_error("updating vie", e))?;

    Ok(Json(vie.into()))
}

/// Delete Vie
#[utoipa::path(
    delete,
    path = "/vies/{id}",
    params(("id" = i64, Path, description = "Vie ID")),
    responses(
        (status = 200, description = "Vie deleted", body = MessageResponse),
        (status = 404, description = "Vie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Vie"
)]
pub async fn delete_vie(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = path_id(path)?;

    let deleted = state
        .vie_service
        .delete(id)
        .await
        .map_err(|e| domain_error("deleting vie", e))?;

    if !deleted {
        return Err(not_found(id));
    }

    Ok(Json(MessageResponse {
        message: "Vie deleted successfully".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vies", get(list_vies).post(create_vie))
        .route("/vies/count", get(count_vies))
        .route("/vies/:id", get(get_vie).put(update_vie).delete(delete_vie))
}
