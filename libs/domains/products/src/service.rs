//! Product Service - Business logic layer

use observability::ValidationMetrics;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ProductError, ProductResult};
use crate::mapping::store_fields;
use crate::models::{Product, ProductInput, ValidationResult};
use crate::repository::ProductRepository;
use crate::validation::validate;

/// Product service providing business logic operations
///
/// Runs validation before any store write and maps records to products.
/// Holds no state of its own beyond the shared repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Run the field rules without touching the store
    pub fn validate_product(&self, input: &ProductInput) -> ValidationResult {
        let result = validate(input);
        ValidationMetrics::record(result.valido, result.erros.len());
        result
    }

    fn ensure_valid(&self, input: &ProductInput) -> ProductResult<()> {
        let result = self.validate_product(input);
        if result.valido {
            Ok(())
        } else {
            Err(ProductError::Validation(result))
        }
    }

    /// Validate and create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.ensure_valid(&input)?;

        let record = self.repository.create(store_fields(&input)).await?;
        info!(id = %record.id, "Product created");

        Ok(record.into())
    }

    /// List all products, newest first
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        let records = self.repository.list().await?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get(id)
            .await?
            .map(Product::from)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Merge `patch` over the stored product, re-validate the whole and write it back
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: &str, patch: ProductInput) -> ProductResult<Product> {
        let existing = self.get_product(id).await?;

        let merged = patch.merged_over(ProductInput::from(&existing));
        self.ensure_valid(&merged)?;

        let record = self.repository.update(id, store_fields(&merged)).await?;
        info!(id = %record.id, "Product updated");

        Ok(record.into())
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        if self.repository.get(id).await?.is_none() {
            return Err(ProductError::NotFound(id.to_string()));
        }

        self.repository.delete(id).await?;
        info!(id = %id, "Product deleted");
        Ok(())
    }
}
