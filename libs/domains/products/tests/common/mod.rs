//! In-process stand-in for the Airtable REST API.
//!
//! Serves one table at `/v0/{base}/{table}` with list (sorted, paginated),
//! get, create, patch and delete, and checks the bearer token on every call.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use core_config::airtable::AirtableConfig;
use domain_products::{handlers, AirtableProductRepository, ProductService, StoreRecord};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const API_KEY: &str = "test-key";
pub const BASE_ID: &str = "appTest";
pub const TABLE: &str = "Produtos";

#[derive(Default)]
pub struct FakeState {
    pub records: Vec<StoreRecord>,
    pub next_id: u32,
    pub page_size: usize,
    pub list_queries: Vec<HashMap<String, String>>,
    pub writes: Vec<Map<String, Value>>,
}

impl FakeState {
    fn created_time(&self) -> String {
        format!("2024-05-01T12:{:02}:00.000Z", self.next_id)
    }
}

#[derive(Clone)]
pub struct FakeAirtable {
    pub url: String,
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeAirtable {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(FakeState {
            page_size: 100,
            ..Default::default()
        }));

        let app = Router::new()
            .route(
                "/v0/{base}/{table}",
                get(list_records).post(create_record),
            )
            .route(
                "/v0/{base}/{table}/{id}",
                get(get_record).patch(update_record).delete(delete_record),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/v0", addr),
            state,
        }
    }

    pub fn config(&self, api_key: &str) -> AirtableConfig {
        AirtableConfig::new(api_key.to_string(), BASE_ID.to_string())
            .with_api_url(self.url.clone())
            .with_timeout(Duration::from_secs(5))
    }

    /// Router of the products domain wired to this fake store
    pub fn router(&self) -> Router {
        router_for(&self.config(API_KEY))
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.state.lock().unwrap().page_size = page_size;
    }

    /// Inserts a record directly, bypassing the API
    pub fn seed(&self, fields: Value) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("rec{:03}", state.next_id);
        let record = StoreRecord {
            id: id.clone(),
            created_time: state.created_time(),
            fields: as_map(fields),
        };
        state.records.push(record);
        id
    }

    pub fn record(&self, id: &str) -> Option<StoreRecord> {
        let state = self.state.lock().unwrap();
        state.records.iter().find(|r| r.id == id).cloned()
    }

    pub fn record_count(&self) -> usize {
        self.state.lock().unwrap().records.len()
    }

    pub fn last_write(&self) -> Option<Map<String, Value>> {
        self.state.lock().unwrap().writes.last().cloned()
    }

    pub fn list_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.lock().unwrap().list_queries.clone()
    }
}

pub fn router_for(config: &AirtableConfig) -> Router {
    let repository = AirtableProductRepository::new(config).unwrap();
    handlers::router(ProductService::new(repository))
}

pub fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

type Shared = State<Arc<Mutex<FakeState>>>;

fn airtable_error(status: StatusCode, kind: &str) -> Response {
    (status, Json(json!({ "error": { "type": kind } }))).into_response()
}

fn check(headers: &HeaderMap, base: &str, table: &str) -> Result<(), Response> {
    let expected = format!("Bearer {}", API_KEY);
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return Err(airtable_error(StatusCode::UNAUTHORIZED, "AUTHENTICATION_REQUIRED"));
    }
    if base != BASE_ID || table != TABLE {
        return Err(airtable_error(StatusCode::NOT_FOUND, "TABLE_NOT_FOUND"));
    }
    Ok(())
}

fn sort_key(record: &StoreRecord) -> String {
    record
        .fields
        .get("DataCriacao")
        .and_then(Value::as_str)
        .unwrap_or(record.created_time.as_str())
        .to_string()
}

async fn list_records(
    State(state): Shared,
    Path((base, table)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check(&headers, &base, &table) {
        return response;
    }

    let mut state = state.lock().unwrap();
    state.list_queries.push(query.clone());

    let mut records = state.records.clone();
    if query.get("sort[0][direction]").map(String::as_str) == Some("desc") {
        records.sort_by_key(|r| std::cmp::Reverse(sort_key(r)));
    }

    let start: usize = query
        .get("offset")
        .and_then(|o| o.parse().ok())
        .unwrap_or(0);
    let end = (start + state.page_size).min(records.len());
    let page = records[start.min(end)..end].to_vec();

    let mut body = json!({ "records": page });
    if end < records.len() {
        body["offset"] = json!(end.to_string());
    }
    Json(body).into_response()
}

async fn get_record(
    State(state): Shared,
    Path((base, table, id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check(&headers, &base, &table) {
        return response;
    }

    let state = state.lock().unwrap();
    match state.records.iter().find(|r| r.id == id) {
        Some(record) => Json(record.clone()).into_response(),
        None => airtable_error(StatusCode::NOT_FOUND, "NOT_FOUND"),
    }
}

async fn create_record(
    State(state): Shared,
    Path((base, table)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check(&headers, &base, &table) {
        return response;
    }

    let fields = as_map(body["fields"].clone());
    let mut state = state.lock().unwrap();
    state.next_id += 1;
    let record = StoreRecord {
        id: format!("rec{:03}", state.next_id),
        created_time: state.created_time(),
        fields: fields.clone(),
    };
    state.writes.push(fields);
    state.records.push(record.clone());

    Json(record).into_response()
}

async fn update_record(
    State(state): Shared,
    Path((base, table, id)): Path<(String, String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check(&headers, &base, &table) {
        return response;
    }

    let fields = as_map(body["fields"].clone());
    let mut state = state.lock().unwrap();
    state.writes.push(fields.clone());

    match state.records.iter_mut().find(|r| r.id == id) {
        Some(record) => {
            record.fields.extend(fields);
            Json(record.clone()).into_response()
        }
        None => airtable_error(StatusCode::NOT_FOUND, "NOT_FOUND"),
    }
}

async fn delete_record(
    State(state): Shared,
    Path((base, table, id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check(&headers, &base, &table) {
        return response;
    }

    let mut state = state.lock().unwrap();
    let before = state.records.len();
    state.records.retain(|r| r.id != id);

    if state.records.len() == before {
        airtable_error(StatusCode::NOT_FOUND, "NOT_FOUND")
    } else {
        Json(json!({ "deleted": true, "id": id })).into_response()
    }
}
