//! Transport error type and classification of curl failures.

use thiserror::Error;

/// Network-level failure of one request. HTTP status codes are not errors here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("not a bare host name: {0:?}")]
    InvalidHost(String),
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: u64 },
    #[error("{0}")]
    Curl(#[from] curl::Error),
}

/// Coarse failure category, used for log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connection,
    TooLarge,
    Other,
}

impl TransportError {
    pub fn kind(&self) -> TransportErrorKind {
        match self {
            TransportError::Curl(e) => classify_curl_error(e),
            TransportError::BodyTooLarge { .. } => TransportErrorKind::TooLarge,
            TransportError::InvalidUrl { .. } | TransportError::InvalidHost(_) => {
                TransportErrorKind::Other
            }
        }
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> TransportErrorKind {
    if e.is_operation_timedout() {
        return TransportErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportErrorKind::Connection;
    }
    TransportErrorKind::Other
}
