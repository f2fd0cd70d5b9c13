//! OpenAPI documentation configuration

use axum_helpers::HealthResponse;
use utoipa::{Modify, OpenApi};

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Produtos API",
        version = "0.1.0",
        description = "Product validation and CRUD backed by an Airtable table",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(axum_helpers::server::health::health_handler),
    components(schemas(HealthResponse)),
    modifiers(&ProductsDoc),
    tags(
        (name = "health", description = "Liveness endpoint")
    )
)]
pub struct ApiDoc;

/// Merges the products domain documentation, whose routes live at the root
struct ProductsDoc;

impl Modify for ProductsDoc {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(domain_products::ApiDoc::openapi());
    }
}
