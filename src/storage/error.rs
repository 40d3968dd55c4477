use std::time::Duration;
use thiserror::Error;

/// Failures at the database boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Session could not be established or verified at startup, including
    /// when the attempt ran past its deadline.
    #[error("can't connect to {uri}: {source}")]
    Connection {
        uri: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("insert failed: {0}")]
    Insert(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },
}

impl StoreError {
    pub fn connection(
        uri: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        StoreError::Connection {
            uri: uri.into(),
            source: source.into(),
        }
    }
}
