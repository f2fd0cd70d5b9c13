//! Translation between the API product shape and record store fields.
//!
//! Reads are lossy-tolerant: a malformed store field falls back to a default
//! instead of failing the request.

use serde_json::{Map, Number, Value};

use crate::models::{fields, Product, ProductInput, StoreRecord};

/// Loose numeric coercion used by validation and both mapping directions.
///
/// Numbers pass through, booleans become 1/0, strings are trimmed (empty reads
/// as 0) and parsed as decimal, exponent, `Infinity` or `0x`/`0o`/`0b` literals.
/// Everything else fails.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_numeric_text(s),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text form of a scalar; arrays, objects and null read as empty.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn parse_numeric_text(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(parsed) = parse_prefixed_integer(s) {
        return parsed;
    }

    // f64::from_str also takes "inf" and "nan" spellings
    if s
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return None;
    }

    s.parse::<f64>().ok()
}

/// `Some(result)` when `s` carries a radix prefix, `None` otherwise.
fn parse_prefixed_integer(s: &str) -> Option<Option<f64>> {
    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }

    Some(u64::from_str_radix(digits, radix).ok().map(|n| n as f64))
}

fn number_or_null(value: &Value) -> Value {
    if value.is_number() {
        return value.clone();
    }

    coerce_number(value)
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Builds the store write payload from a candidate.
///
/// Only keys present in the candidate are emitted and `DataCriacao` never is,
/// so a PATCH leaves untouched fields alone.
pub fn store_fields(input: &ProductInput) -> Map<String, Value> {
    let mut out = Map::new();

    if let Some(titulo) = &input.titulo {
        out.insert(fields::TITULO.to_string(), Value::String(coerce_text(titulo)));
    }
    if let Some(descricao) = &input.descricao {
        out.insert(fields::DESCRICAO.to_string(), descricao.clone());
    }
    if let Some(preco) = &input.preco {
        out.insert(fields::PRECO.to_string(), number_or_null(preco));
    }
    if let Some(categoria) = &input.categoria {
        out.insert(fields::CATEGORIA.to_string(), categoria.clone());
    }
    if let Some(estoque) = &input.estoque {
        out.insert(fields::ESTOQUE.to_string(), number_or_null(estoque));
    }

    out
}

fn finite_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(coerce_number).filter(|n| n.is_finite())
}

impl From<StoreRecord> for Product {
    fn from(record: StoreRecord) -> Self {
        let StoreRecord {
            id,
            created_time,
            fields: store,
        } = record;

        let text = |key: &str| {
            store
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let data_criacao = store
            .get(fields::DATA_CRIACAO)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(created_time);

        Product {
            id,
            titulo: text(fields::TITULO),
            descricao: text(fields::DESCRICAO),
            preco: finite_number(store.get(fields::PRECO)).unwrap_or(0.0),
            categoria: text(fields::CATEGORIA),
            estoque: finite_number(store.get(fields::ESTOQUE)),
            data_criacao,
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        ProductInput {
            titulo: Some(Value::String(product.titulo.clone())),
            descricao: Some(Value::String(product.descricao.clone())),
            preco: Number::from_f64(product.preco).map(Value::Number),
            categoria: Some(Value::String(product.categoria.clone())),
            estoque: product
                .estoque
                .and_then(Number::from_f64)
                .map(Value::Number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Value) -> StoreRecord {
        StoreRecord {
            id: "recAbc123".to_string(),
            created_time: "2024-05-01T12:00:00.000Z".to_string(),
            fields: match fields {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(3.5)), Some(3.5));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!(false)), Some(0.0));
        assert_eq!(coerce_number(&json!(" 12.5 ")), Some(12.5));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!("   ")), Some(0.0));
        assert_eq!(coerce_number(&json!("1e3")), Some(1000.0));
        assert_eq!(coerce_number(&json!(".5")), Some(0.5));
        assert_eq!(coerce_number(&json!("0x1F")), Some(31.0));
        assert_eq!(coerce_number(&json!("-Infinity")), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_coerce_number_failures() {
        for value in [
            json!("abc"),
            json!("12abc"),
            json!("NaN"),
            json!("inf"),
            json!("0x"),
            json!("0b102"),
            json!([1]),
            json!({ "valor": 1 }),
            Value::Null,
        ] {
            assert_eq!(coerce_number(&value), None, "{value} should not coerce");
        }
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce_text(&json!("Pera")), "Pera");
        assert_eq!(coerce_text(&json!(12345)), "12345");
        assert_eq!(coerce_text(&json!(true)), "true");
        assert_eq!(coerce_text(&json!(["Pera Williams"])), "");
    }

    #[test]
    fn test_store_fields_only_present_keys() {
        let input = ProductInput {
            preco: Some(json!("7.90")),
            ..Default::default()
        };

        let out = store_fields(&input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[fields::PRECO], json!(7.9));
    }

    #[test]
    fn test_store_fields_full_candidate() {
        let input = ProductInput {
            titulo: Some(json!("Maçã Fuji")),
            descricao: Some(json!("Doce")),
            preco: Some(json!(3.5)),
            categoria: Some(json!("Fruta")),
            estoque: Some(json!("bad")),
        };

        let out = store_fields(&input);
        assert_eq!(
            Value::Object(out),
            json!({
                "Titulo": "Maçã Fuji",
                "Descricao": "Doce",
                "Preco": 3.5,
                "Categoria": "Fruta",
                "Estoque": null,
            })
        );
    }

    #[test]
    fn test_store_fields_never_writes_timestamp() {
        let input: ProductInput =
            serde_json::from_value(json!({ "titulo": "Couve Manteiga", "dataCriacao": "x" }))
                .unwrap();
        assert!(!store_fields(&input).contains_key(fields::DATA_CRIACAO));
    }

    #[test]
    fn test_product_from_record() {
        let product = Product::from(record(json!({
            "Titulo": "Maçã Fuji",
            "Descricao": "Doce",
            "Preco": 3.5,
            "Categoria": "Fruta",
            "Estoque": 40,
            "DataCriacao": "2024-04-30T08:00:00.000Z",
        })));

        assert_eq!(product.id, "recAbc123");
        assert_eq!(product.titulo, "Maçã Fuji");
        assert_eq!(product.preco, 3.5);
        assert_eq!(product.estoque, Some(40.0));
        assert_eq!(product.data_criacao, "2024-04-30T08:00:00.000Z");
    }

    #[test]
    fn test_product_from_malformed_record() {
        let product = Product::from(record(json!({
            "Titulo": 42,
            "Preco": "caro",
            "Estoque": "muito",
            "DataCriacao": "",
        })));

        assert_eq!(product.titulo, "");
        assert_eq!(product.descricao, "");
        assert_eq!(product.categoria, "");
        assert_eq!(product.preco, 0.0);
        assert_eq!(product.estoque, None);
        assert_eq!(product.data_criacao, "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        for fields in [
            json!({
                "Titulo": "Cenoura Orgânica",
                "Descricao": "Sem agrotóxicos",
                "Preco": 4.2,
                "Categoria": "Legume",
                "Estoque": 0,
            }),
            json!({ "Titulo": "Alface", "Preco": "2,50", "Estoque": [] }),
            json!({}),
        ] {
            let first = Product::from(record(fields));
            let rewritten = store_fields(&ProductInput::from(&first));
            let second = Product::from(record(Value::Object(rewritten)));
            assert_eq!(first, second);
        }
    }
}
