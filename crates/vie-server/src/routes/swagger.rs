//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::openapi::{server::Server, OpenApi as OpenApiDoc};
use utoipa::OpenApi;

use crate::models::{CountResponse, ErrorResponse, MessageResponse, VieRequest, VieResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::vie::list_vies,
        super::vie::create_vie,
        super::vie::count_vies,
        super::vie::get_vie,
        super::vie::update_vie,
        super::vie::delete_vie,
    ),
    components(schemas(
        VieRequest,
        VieResponse,
        ErrorResponse,
        MessageResponse,
        CountResponse,
    )),
    tags(
        (name = "Vie", description = "Vie record management")
    ),
    info(
        title = "Vie API",
        description = "CRUD API for Vie records"
    )
)]
pub struct ApiDoc;

/// OpenAPI document with the server URL pointing at the mounted base path
pub fn openapi(base_path: &str) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    let url = if base_path.is_empty() { "/" } else { base_path };
    doc.servers = Some(vec![Server::new(url)]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_vie_paths() {
        let doc = openapi("/api");
        for path in ["/vies", "/vies/count", "/vies/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        let servers = doc.servers.unwrap();
        assert_eq!(servers[0].url, "/api");
    }

    #[test]
    fn test_root_mount_uses_slash() {
        let doc = openapi("");
        assert_eq!(doc.servers.unwrap()[0].url, "/");
    }
}
