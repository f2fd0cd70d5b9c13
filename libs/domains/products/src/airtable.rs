//! Airtable REST implementation of [`ProductRepository`].

use async_trait::async_trait;
use core_config::airtable::AirtableConfig;
use observability::StoreMetrics;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

use crate::error::{ProductError, ProductResult};
use crate::models::{fields, StoreRecord};
use crate::repository::ProductRepository;

#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(default)]
    records: Vec<StoreRecord>,
    offset: Option<String>,
}

#[derive(Debug, Serialize)]
struct WriteBody<'a> {
    fields: &'a Map<String, Value>,
}

/// Product repository backed by one Airtable table.
///
/// Holds a single pooled `reqwest::Client` with the configured request timeout.
pub struct AirtableProductRepository {
    client: Client,
    table_url: String,
    api_key: String,
}

impl AirtableProductRepository {
    pub fn new(config: &AirtableConfig) -> ProductResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProductError::Internal(format!("failed to build HTTP client: {}", e)))?;

        let table_url = format!(
            "{}/{}/{}",
            config.api_url.trim_end_matches('/'),
            urlencoding::encode(&config.base_id),
            urlencoding::encode(&config.table_name)
        );

        debug!(table_url = %table_url, "Airtable repository configured");

        Ok(Self {
            client,
            table_url,
            api_key: config.api_key.clone(),
        })
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.table_url, urlencoding::encode(id))
    }

    /// Sends an authenticated request and records call metrics.
    async fn execute(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ProductResult<Response> {
        let started = Instant::now();
        let result = request.bearer_auth(&self.api_key).send().await;
        let elapsed = started.elapsed().as_secs_f64();

        match result {
            Ok(response) => {
                let outcome = match response.status() {
                    s if s.is_success() => "success",
                    StatusCode::NOT_FOUND => "not_found",
                    _ => "error",
                };
                StoreMetrics::record_call(operation, outcome, elapsed);
                Ok(response)
            }
            Err(e) => {
                StoreMetrics::record_call(operation, "error", elapsed);
                error!(operation, error = %e, "Record store request failed");
                Err(e.into())
            }
        }
    }
}

/// Turns a non-success answer into `ProductError::Upstream` carrying the store's error body
async fn ensure_success(operation: &'static str, response: Response) -> ProductResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    warn!(operation, status = status.as_u16(), body = %message, "Record store returned an error");

    Err(ProductError::Upstream {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ProductRepository for AirtableProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<StoreRecord>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;
        let mut pages = 0;

        loop {
            let mut query = vec![
                ("sort[0][field]", fields::DATA_CRIACAO.to_string()),
                ("sort[0][direction]", "desc".to_string()),
            ];
            if let Some(offset) = &offset {
                query.push(("offset", offset.clone()));
            }

            let response = self
                .execute("list", self.client.get(&self.table_url).query(&query))
                .await?;
            let page: ListPage = ensure_success("list", response).await?.json().await?;

            pages += 1;
            records.extend(page.records);

            match page.offset {
                Some(next) if !next.is_empty() => offset = Some(next),
                _ => break,
            }
        }

        StoreMetrics::record_listed(records.len(), pages);
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> ProductResult<Option<StoreRecord>> {
        let response = self
            .execute("get", self.client.get(self.record_url(id)))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let record = ensure_success("get", response).await?.json().await?;
        Ok(Some(record))
    }

    #[instrument(skip(self, fields))]
    async fn create(&self, fields: Map<String, Value>) -> ProductResult<StoreRecord> {
        let request = self
            .client
            .post(&self.table_url)
            .json(&WriteBody { fields: &fields });
        let response = self.execute("create", request).await?;

        Ok(ensure_success("create", response).await?.json().await?)
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, id: &str, fields: Map<String, Value>) -> ProductResult<StoreRecord> {
        let request = self
            .client
            .patch(self.record_url(id))
            .json(&WriteBody { fields: &fields });
        let response = self.execute("update", request).await?;

        Ok(ensure_success("update", response).await?.json().await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<()> {
        let response = self
            .execute("delete", self.client.delete(self.record_url(id)))
            .await?;

        ensure_success("delete", response).await?;
        Ok(())
    }
}
