use serde::{Deserialize, Serialize};
use std::fmt;

/// Error payload the controller attaches to failed requests.
///
/// The controller is not consistent about the shape: some endpoints return
/// `{"error": "..."}`, others `{"code": ..., "message": "..."}`, and a few
/// return plain text. Missing pieces stay `None` and the HTTP status carried
/// by [`ApiError`] is the authoritative code.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ControllerError {
    pub code: Option<i32>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ControllerError {
    /// The most specific description available, if any.
    pub fn detail(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.detail(), self.code) {
            (Some(detail), _) => write!(f, "{detail}"),
            (None, Some(code)) => write!(f, "code={code}"),
            (None, None) => write!(f, "no detail"),
        }
    }
}

/// A non-2xx response from the controller, with request context.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP verb of the failed request.
    pub verb: String,
    /// Request URI relative to the controller base.
    pub uri: String,
    /// HTTP response status code.
    pub status: u16,
    /// Parsed response body, as far as it could be parsed.
    pub detail: ControllerError,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} returned HTTP {}: {}",
            self.verb, self.uri, self.status, self.detail
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid controller url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication error: {0}")]
    Auth(String),
    #[error("controller api error: {0}")]
    Api(ApiError),
    #[error("object lookup error: {0}")]
    Lookup(String),
    #[error("giving up on {verb} {uri} after {attempts} attempts")]
    RetriesExhausted {
        verb: String,
        uri: String,
        attempts: u32,
    },
}

impl Error {
    /// HTTP status of the underlying controller response, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
