//! Products Domain
//!
//! Validation and CRUD for products stored in an Airtable table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, merge on update
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Mapping   │  ← API shape ⇄ store fields
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Record store access (trait + Airtable implementation)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::airtable::AirtableConfig;
//! use domain_products::{handlers, AirtableProductRepository, ProductService};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AirtableConfig::new("key".to_string(), "appXXXXXXXXXXXXXX".to_string());
//!
//! let repository = AirtableProductRepository::new(&config)?;
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod airtable;
pub mod error;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use airtable::AirtableProductRepository;
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{BadRequestBody, Category, Product, ProductInput, StoreRecord, ValidationResult};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use validation::validate;
