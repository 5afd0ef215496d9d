use thiserror::Error;

/// Errors returned by the row-store client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A table URL could not be constructed from the configured base URL.
    #[error("invalid store URL: {0}")]
    InvalidUrl(String),

    /// The store answered with a non-2xx status.
    #[error("unexpected status {status} from {table}: {body}")]
    UnexpectedStatus {
        table: String,
        status: u16,
        body: String,
    },

    /// The response body could not be deserialized into the expected rows.
    #[error("deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
