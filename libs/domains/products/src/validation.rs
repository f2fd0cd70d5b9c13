//! Field rules for candidate products.

use std::str::FromStr;

use serde_json::Value;

use crate::mapping::{coerce_number, coerce_text};
use crate::models::{Category, ProductInput, ValidationResult};

pub const MIN_TITLE_CHARS: usize = 5;

pub const TITLE_TOO_SHORT: &str = "title must be at least 5 characters";
pub const DESCRIPTION_NOT_TEXT: &str = "description must be text";
pub const PRICE_NOT_A_NUMBER: &str = "price must be a number";
pub const PRICE_NOT_POSITIVE: &str = "price must be greater than zero";
pub const CATEGORY_INVALID: &str = "category must be Fruta, Legume, or Verdura";
pub const STOCK_INVALID: &str = "stock must be a number greater than or equal to zero";

/// Checks every rule and collects all violations in rule order.
pub fn validate(candidate: &ProductInput) -> ValidationResult {
    let mut erros = Vec::new();

    let titulo = candidate.titulo.as_ref().map(coerce_text).unwrap_or_default();
    if titulo.trim().chars().count() < MIN_TITLE_CHARS {
        erros.push(TITLE_TOO_SHORT.to_string());
    }

    if matches!(&candidate.descricao, Some(d) if !d.is_string()) {
        erros.push(DESCRIPTION_NOT_TEXT.to_string());
    }

    match candidate.preco.as_ref().and_then(coerce_number) {
        None => erros.push(PRICE_NOT_A_NUMBER.to_string()),
        Some(preco) if preco <= 0.0 => erros.push(PRICE_NOT_POSITIVE.to_string()),
        Some(_) => {}
    }

    if !is_known_category(candidate.categoria.as_ref()) {
        erros.push(CATEGORY_INVALID.to_string());
    }

    if let Some(estoque) = &candidate.estoque {
        if !coerce_number(estoque).is_some_and(|n| n >= 0.0) {
            erros.push(STOCK_INVALID.to_string());
        }
    }

    ValidationResult::from_errors(erros)
}

fn is_known_category(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| Category::from_str(s).is_ok())
}
