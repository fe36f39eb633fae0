//! Read-only access to Supabase tables through PostgREST.
//!
//! Only the slice of the query API the reports need is modelled: equality filters,
//! column selection, ordering, a row limit and exact counts. Counting uses
//! `Prefer: count=exact` on a `HEAD` request and reads the total from the
//! `Content-Range` response header.

use crate::config::SupabaseSettings;
use crate::constants::HTTP_REQUEST_TIMEOUT;
use crate::core::LeagueOpsError;
use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_RANGE, HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use tracing::debug;

/// One row as returned by PostgREST.
pub type Row = Map<String, Value>;

/// A filtered query against a single table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    filters: Vec<(String, String)>,
    select: Option<String>,
    order: Option<String>,
    limit: Option<usize>,
}

impl TableQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: Vec::new(),
            select: None,
            order: None,
            limit: None,
        }
    }

    /// Keep rows where `column` equals `value`.
    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((column.into(), value.to_string()));
        self
    }

    /// Comma-separated list of columns to return.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = Some(columns.into());
        self
    }

    /// Ascending order on `column`.
    pub fn order(mut self, column: impl Into<String>) -> Self {
        self.order = Some(column.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Query-string pairs in PostgREST syntax.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> =
            self.filters.iter().map(|(column, value)| (column.clone(), format!("eq.{value}"))).collect();
        if let Some(select) = &self.select {
            params.push(("select".to_string(), select.clone()));
        }
        if let Some(order) = &self.order {
            params.push(("order".to_string(), format!("{order}.asc")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// Something that can answer filtered counts and row listings.
///
/// [`SupabaseClient`] is the production implementation; tests use an in-memory table.
#[allow(async_fn_in_trait)]
pub trait TableSource {
    /// Exact number of rows matching the query's filters. Limit and select are ignored.
    async fn count(&self, query: &TableQuery) -> Result<u64>;

    /// Rows matching the query, honouring limit, order and select.
    async fn rows(&self, query: &TableQuery) -> Result<Vec<Row>>;
}

/// PostgREST client for one Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
}

impl SupabaseClient {
    /// Build a client from settings, failing fast when a remote project has no key.
    pub fn new(settings: &SupabaseSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = settings.require_service_key()? {
            let value = HeaderValue::from_str(key).map_err(|_| LeagueOpsError::ConfigError {
                message: "SUPABASE_SERVICE_ROLE_KEY contains characters not allowed in a header"
                    .to_string(),
            })?;
            let bearer = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|_| {
                LeagueOpsError::ConfigError {
                    message: "SUPABASE_SERVICE_ROLE_KEY is not a valid bearer token".to_string(),
                }
            })?;
            headers.insert("apikey", value);
            headers.insert(AUTHORIZATION, bearer);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", settings.url),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder, query: &TableQuery, operation: &str) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| LeagueOpsError::NetworkError {
            operation: format!("{operation} {}", query.table),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LeagueOpsError::QueryFailed {
                table: query.table.clone(),
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(response)
    }
}

impl TableSource for SupabaseClient {
    async fn count(&self, query: &TableQuery) -> Result<u64> {
        let params: Vec<(String, String)> = query
            .filters()
            .iter()
            .map(|(column, value)| (column.clone(), format!("eq.{value}")))
            .collect();
        debug!("HEAD {} {:?}", query.table, params);

        let request = self
            .http
            .head(self.table_url(&query.table))
            .query(&params)
            .header("Prefer", "count=exact");
        let response = self.send(request, query, "count").await?;

        let header = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        parse_content_range(header).ok_or_else(|| {
            LeagueOpsError::NetworkError {
                operation: format!("count {}", query.table),
                reason: format!("no row total in Content-Range header '{header}'"),
            }
            .into()
        })
    }

    async fn rows(&self, query: &TableQuery) -> Result<Vec<Row>> {
        let params = query.to_params();
        debug!("GET {} {:?}", query.table, params);

        let request = self.http.get(self.table_url(&query.table)).query(&params);
        let response = self.send(request, query, "select from").await?;

        response.json::<Vec<Row>>().await.map_err(|e| {
            LeagueOpsError::InvalidJson {
                file: self.table_url(&query.table),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Total from a `Content-Range` header: `0-9/123` and `*/123` give 123; `*/*` gives None.
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}
