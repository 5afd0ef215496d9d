//! The row-store client: one `select` per request, batched `select_all` for
//! tables larger than the per-request row ceiling.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use treadquote_core::AppConfig;

use crate::error::StoreError;
use crate::filter::Filter;

/// Hard per-request row ceiling enforced by the store. Requests asking for
/// more still receive at most this many rows.
pub const PAGE_CEILING: usize = 1000;

/// Practical ceiling on `in.(…)` list size before request URLs get rejected.
/// Callers batching reference lookups chunk their id lists at this size.
pub const IN_LIST_MAX: usize = 200;

/// A half-open row window expressed as `limit`/`offset` query parameters.
#[derive(Debug, Clone, Copy)]
pub struct RowRange {
    pub offset: usize,
    pub limit: usize,
}

impl RowRange {
    /// The first `limit` rows.
    #[must_use]
    pub fn first(limit: usize) -> Self {
        Self { offset: 0, limit }
    }
}

/// Client for the directory's PostgREST-style row store.
///
/// Holds the HTTP client, the `/rest/v1/` root, and the API key (sent as
/// both `apikey` and bearer token on every request). Use
/// [`StoreClient::new`] with a mock server base URL in tests.
pub struct StoreClient {
    client: Client,
    rest_root: Url,
    api_key: String,
}

impl StoreClient {
    /// Creates a client for the store at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StoreError::InvalidUrl`] if `api_url`
    /// does not parse as a base URL.
    pub fn new(api_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("treadquote/0.1 (tire-directory)")
            .build()?;

        // Normalise: exactly one trailing slash so Url::join appends the
        // table name instead of replacing the last path segment.
        let root = format!("{}/rest/v1/", api_url.trim_end_matches('/'));
        let rest_root = Url::parse(&root)
            .map_err(|e| StoreError::InvalidUrl(format!("'{api_url}': {e}")))?;

        Ok(Self {
            client,
            rest_root,
            api_key: api_key.to_owned(),
        })
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`StoreClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        Self::new(&config.api_url, &config.api_key, config.http_timeout_secs)
    }

    /// Fetches one window of rows from `table`.
    ///
    /// `columns` is the projection (`"*"` for all columns). All `filters`
    /// must match. At most [`PAGE_CEILING`] rows come back regardless of
    /// `range.limit`; callers needing more use [`StoreClient::select_all`].
    ///
    /// # Errors
    ///
    /// - [`StoreError::Http`] on network failure.
    /// - [`StoreError::UnexpectedStatus`] on a non-2xx response.
    /// - [`StoreError::Deserialize`] if the body is not the expected rows.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter],
        range: Option<RowRange>,
    ) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(table, columns, filters, range)?;

        let response = self
            .client
            .get(url.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                table: table.to_owned(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Enumerates `table` fully by repeating [`StoreClient::select`] with an
    /// advancing offset window of [`PAGE_CEILING`] rows. A batch shorter than
    /// the page size signals exhaustion and terminates the loop.
    ///
    /// Any error aborts the loop and discards rows fetched so far — partial
    /// enumerations are never returned.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`StoreClient::select`].
    pub async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter],
    ) -> Result<Vec<T>, StoreError> {
        let mut rows: Vec<T> = Vec::new();
        let mut offset = 0usize;

        loop {
            let batch: Vec<T> = self
                .select(
                    table,
                    columns,
                    filters,
                    Some(RowRange {
                        offset,
                        limit: PAGE_CEILING,
                    }),
                )
                .await?;

            let batch_len = batch.len();
            rows.extend(batch);
            tracing::debug!(table, offset, batch_len, "select_all page consumed");

            if batch_len < PAGE_CEILING {
                break;
            }
            offset += PAGE_CEILING;
        }

        Ok(rows)
    }

    /// Builds the request URL: projection, filter operators, then the row
    /// window, all percent-encoded via [`Url::query_pairs_mut`].
    fn table_url(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter],
        range: Option<RowRange>,
    ) -> Result<Url, StoreError> {
        let mut url = self
            .rest_root
            .join(table)
            .map_err(|e| StoreError::InvalidUrl(format!("table '{table}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", columns);
            for filter in filters {
                let (column, value) = filter.to_query_pair();
                pairs.append_pair(column, &value);
            }
            if let Some(range) = range {
                pairs.append_pair("limit", &range.limit.to_string());
                pairs.append_pair("offset", &range.offset.to_string());
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
