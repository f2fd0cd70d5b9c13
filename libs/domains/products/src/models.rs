use axum_helpers::ErrorResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Field names of the product table in the record store
pub mod fields {
    pub const TITULO: &str = "Titulo";
    pub const DESCRICAO: &str = "Descricao";
    pub const PRECO: &str = "Preco";
    pub const CATEGORIA: &str = "Categoria";
    pub const ESTOQUE: &str = "Estoque";
    pub const DATA_CRIACAO: &str = "DataCriacao";
}

/// Product category. Matching is exact and case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Category {
    Fruta,
    Legume,
    Verdura,
}

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Record id assigned by the record store
    #[schema(example = "recA1b2C3d4E5f6G7")]
    pub id: String,
    #[schema(example = "Maçã Fuji")]
    pub titulo: String,
    #[schema(example = "Maçã doce e crocante")]
    pub descricao: String,
    #[schema(example = 3.5)]
    pub preco: f64,
    /// Fruta, Legume or Verdura for valid records
    #[schema(example = "Fruta")]
    pub categoria: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 120)]
    pub estoque: Option<f64>,
    /// Creation timestamp assigned by the record store
    #[schema(example = "2024-05-01T12:00:00.000Z")]
    pub data_criacao: String,
}

/// Candidate product sent by clients.
///
/// Fields stay loosely typed so validation can report type errors itself.
/// `null` deserializes as absent and unknown keys (`id`, `dataCriacao`, ...) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Maçã Fuji")]
    pub titulo: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Maçã doce e crocante")]
    pub descricao: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, example = 3.5)]
    pub preco: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Category>)]
    pub categoria: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, example = 120)]
    pub estoque: Option<Value>,
}

impl ProductInput {
    /// Shallow merge: keys present in `self` win over `existing`.
    ///
    /// A `null` in the update was dropped during deserialization, so it keeps
    /// the stored value instead of clearing it (`{"estoque": null}` leaves the
    /// stock untouched and `{"preco": null}` reports a missing price).
    pub fn merged_over(self, existing: ProductInput) -> ProductInput {
        ProductInput {
            titulo: self.titulo.or(existing.titulo),
            descricao: self.descricao.or(existing.descricao),
            preco: self.preco.or(existing.preco),
            categoria: self.categoria.or(existing.categoria),
            estoque: self.estoque.or(existing.estoque),
        }
    }
}

/// Outcome of validating a candidate product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationResult {
    pub valido: bool,
    /// Violations in rule order
    pub erros: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(erros: Vec<String>) -> Self {
        Self {
            valido: erros.is_empty(),
            erros,
        }
    }
}

/// Body of a 400 answer: the validation result, or the generic message
/// when the request body is not a JSON object
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BadRequestBody {
    Validation(ValidationResult),
    InvalidBody(ErrorResponse),
}

/// One row of the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    pub id: String,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}
