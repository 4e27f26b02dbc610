use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

use crate::error::{ApiError, ControllerError, Error};

/// Only this much of an error body is parsed or logged.
pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Collection envelope returned by the controller's list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionResult {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub results: serde_json::Value,
    #[serde(default)]
    pub next: Option<String>,
}

/// PATCH operation; the request body is `{ "<op>": <payload> }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    Add,
    Replace,
    Delete,
}

impl PatchOp {
    pub(crate) fn key(self) -> &'static str {
        match self {
            PatchOp::Add => "add",
            PatchOp::Replace => "replace",
            PatchOp::Delete => "delete",
        }
    }
}

/// Wraps a PATCH payload under its operation key.
pub(crate) fn patch_envelope<P: serde::Serialize>(
    op: PatchOp,
    payload: &P,
) -> Result<serde_json::Value, Error> {
    let mut envelope = serde_json::Map::new();
    envelope.insert(op.key().to_string(), serde_json::to_value(payload)?);
    Ok(serde_json::Value::Object(envelope))
}

/// Maps a failed response body to a structured API error.
///
/// The body may be a JSON object with `code`/`message`/`error` fields, some
/// other JSON value, or not JSON at all; whatever detail can be recovered is
/// kept and the rest falls back to a trimmed body excerpt.
pub(crate) fn parse_error_from_body(verb: &str, uri: &str, status: u16, body: &[u8]) -> Error {
    let body = &body[..body.len().min(MAX_ERROR_BODY_BYTES)];
    let detail = match serde_json::from_slice::<ControllerError>(body) {
        Ok(detail) if detail.detail().is_some() || detail.code.is_some() => detail,
        _ => ControllerError {
            code: None,
            message: fallback_message(body),
            error: None,
        },
    };
    Error::Api(ApiError {
        verb: verb.to_string(),
        uri: uri.to_string(),
        status,
        detail,
    })
}

fn fallback_message(body: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut message: String = text.chars().take(256).collect();
    if message.len() < text.len() {
        message.push_str("...");
    }
    Some(message)
}

/// Blanks credential values before a payload is logged.
pub(crate) fn scrub_credentials(body: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r#""(password|token|api_token)":\s*"[^"]*""#).expect("regex"));
    pattern.replace_all(body, r#""$1":"***""#).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_envelope_wraps_payload_under_op_key() {
        let payload = serde_json::json!({ "name": "pool-1" });
        let body = patch_envelope(PatchOp::Replace, &payload).expect("envelope");
        assert_eq!(body, serde_json::json!({ "replace": { "name": "pool-1" } }));
        assert_eq!(PatchOp::Add.key(), "add");
        assert_eq!(PatchOp::Delete.key(), "delete");
    }

    #[test]
    fn parse_error_prefers_structured_detail() {
        let body = br#"{"error": "virtualservice not found"}"#;
        let err = parse_error_from_body("GET", "api/virtualservice/vs-1", 404, body);
        match err {
            Error::Api(api) => {
                assert_eq!(api.status, 404);
                assert_eq!(api.detail.detail(), Some("virtualservice not found"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_falls_back_to_body_excerpt() {
        let err = parse_error_from_body("GET", "api/pool", 502, b"<html>bad gateway</html>");
        match err {
            Error::Api(api) => {
                assert_eq!(api.status, 502);
                assert_eq!(api.detail.detail(), Some("<html>bad gateway</html>"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn scrub_credentials_blanks_secret_values() {
        let body = r#"{"username":"admin","password":"hunter2","token":"abc"}"#;
        let scrubbed = scrub_credentials(body);
        assert!(!scrubbed.contains("hunter2"));
        assert!(!scrubbed.contains("abc"));
        assert!(scrubbed.contains(r#""username":"admin""#));
    }
}
