use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

use vie::VieOperations;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{InMemoryVieRepository, PgVieRepository};
use application::VieService;
use config::{ServerConfig, StorageBackend};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub vie_service: Arc<dyn VieOperations>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Vie API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router: API under the base path, health and docs at the root
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let api = routes::vie::router();
    let api = if config.base_path.is_empty() {
        api
    } else {
        Router::new().nest(&config.base_path, api)
    };

    let mut router = Router::new().route("/health", get(health_check)).merge(api);

    if config.swagger_enabled {
        let openapi = routes::swagger::openapi(&config.base_path);
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Vie API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key))
        .context("Invalid server configuration")?;

    let vie_service: Arc<dyn VieOperations> = match config.storage {
        StorageBackend::Postgres => {
            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations completed");

            Arc::new(VieService::new(Arc::new(PgVieRepository::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("VIE_STORAGE=memory - records will not survive a restart");
            Arc::new(VieService::new(Arc::new(InMemoryVieRepository::new())))
        }
    };

    let state = AppState { vie_service };
    let router = app(state, &config);

    if config.swagger_enabled {
        tracing::info!("Swagger UI: /swagger-ui");
    }
    tracing::info!(
        "Vie API ready - routes under '{}'",
        if config.base_path.is_empty() { "/" } else { config.base_path.as_str() }
    );

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState {
            vie_service: Arc::new(VieService::new(Arc::new(InMemoryVieRepository::new()))),
        }
    }

    async fn get_status(router: Router, uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        router.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = app(state(), &ServerConfig::default());
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_base_path_is_respected() {
        let config = ServerConfig {
            base_path: "/v1".to_string(),
            ..ServerConfig::default()
        };
        let router = app(state(), &config);

        assert_eq!(get_status(router.clone(), "/v1/vies/count").await, StatusCode::OK);
        assert_eq!(get_status(router, "/api/vies/count").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_mount() {
        let config = ServerConfig {
            base_path: String::new(),
            ..ServerConfig::default()
        };
        let router = app(state(), &config);
        assert_eq!(get_status(router, "/vies").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_swagger_toggle() {
        let router = app(state(), &ServerConfig::default());
        assert_eq!(
            get_status(router, "/api-docs/openapi.json").await,
            StatusCode::OK
        );

        let config = ServerConfig {
            swagger_enabled: false,
            ..ServerConfig::default()
        };
        let router = app(state(), &config);
        assert_eq!(
            get_status(router, "/api-docs/openapi.json").await,
            StatusCode::NOT_FOUND
        );
    }
}
