//! API routes module

pub mod products;

use axum::{middleware, routing::get, Router};
use axum_helpers::server::{create_router, health_router};
use observability::{metrics_handler, metrics_middleware};

use crate::config::Config;
use crate::openapi::ApiDoc;

/// Create all API routes
pub fn routes(config: &Config) -> eyre::Result<Router> {
    Ok(Router::new()
        .merge(products::router(&config.airtable)?)
        .merge(health_router())
        .route("/metrics", get(metrics_handler)))
}

/// Full application router: routes, documentation, middleware and fallback
pub fn app(config: &Config) -> eyre::Result<Router> {
    let router = create_router::<ApiDoc>(routes(config)?, config.cors_allowed_origin.as_deref())?
        .layer(middleware::from_fn(metrics_middleware));

    Ok(router)
}
