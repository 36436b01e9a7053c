use thiserror::Error;

/// Failures surfaced by a [`RecordStore`](crate::RecordStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a response (connection, TLS, DNS...).
    #[error("request to data service failed: {0}")]
    Http(String),

    /// The data service answered with a non-success status.
    #[error("data service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode record: {0}")]
    Decode(String),

    #[error("could not encode record: {0}")]
    Encode(String),

    /// A single-row read matched nothing.
    #[error("no {table} record matched")]
    NotFound { table: &'static str },

    /// A single-row read matched more than one row.
    #[error("expected one {table} record, found {count}")]
    Ambiguous { table: &'static str, count: usize },

    /// A write the signed-in user may not make. The message is shown as is.
    #[error("{0}")]
    Rejected(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}
