//! Products API routes

use axum::Router;
use core_config::airtable::AirtableConfig;
use domain_products::{handlers, AirtableProductRepository, ProductResult, ProductService};
use tracing::info;

/// Create products router backed by the configured Airtable table
pub fn router(airtable: &AirtableConfig) -> ProductResult<Router> {
    info!(
        base_id = %airtable.base_id,
        table = %airtable.table_name,
        "Using Airtable record store"
    );

    let repository = AirtableProductRepository::new(airtable)?;
    let service = ProductService::new(repository);
    Ok(handlers::router(service))
}
