//! Response interpretation: HTTP status mapping and envelope unwrapping.
//!
//! RagFlow wraps most payloads in `{"code": 0, "message": "...", "data": ...}`.
//! The OpenAI-compatible chat endpoint returns bare payloads without `code`.
//! Two error tiers exist and both must survive:
//!
//! | Condition | Error |
//! |---|---|
//! | body is not JSON (any status) | [`Error::Api`] |
//! | HTTP 401 | [`Error::Authentication`] |
//! | HTTP 404 | [`Error::NotFound`] |
//! | other HTTP status >= 400 | [`Error::Api`] |
//! | envelope `code != 0` | [`Error::Api`] |

use crate::{Error, Result};
use serde_json::Value;

/// Interpret a raw response body received with `status`.
pub fn interpret(status: u16, body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body).map_err(|_| Error::Api {
        message: format!("Invalid JSON response: {}", body),
        status: Some(status),
        code: None,
    })?;

    if status >= 400 {
        return Err(status_error(status, message_of(&value)));
    }

    unwrap_envelope(value)
}

/// Unwrap a decoded, successful response.
///
/// With a `code` field, `0` yields `data` (or the whole envelope when `data`
/// is absent or null) and anything else is an API error. Values without a
/// `code` field pass through unchanged.
pub fn unwrap_envelope(value: Value) -> Result<Value> {
    let code = match value.get("code") {
        Some(code) => code,
        None => return Ok(value),
    };

    if code.as_i64() != Some(0) {
        let message = message_of(&value).unwrap_or_else(|| "Unknown error".to_string());
        return Err(Error::Api {
            message: format!("API request failed: {}", message),
            status: None,
            code: code.as_i64(),
        });
    }

    match value.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Ok(value),
    }
}

/// Map an HTTP failure status to the error taxonomy.
pub fn status_error(status: u16, message: Option<String>) -> Error {
    match status {
        401 => Error::authentication(message.unwrap_or_else(|| "Authentication failed".to_string())),
        404 => Error::not_found(message.unwrap_or_else(|| "Resource not found".to_string())),
        _ => Error::Api {
            message: format!(
                "API request failed: {}",
                message.unwrap_or_else(|| "Unknown error".to_string())
            ),
            status: Some(status),
            code: None,
        },
    }
}

/// Build the error for a failed document download.
///
/// The body may be a JSON envelope or plain text; the text itself is used
/// when no `message` can be extracted.
pub fn download_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| message_of(&v))
        .unwrap_or_else(|| body.to_string());
    let message = format!("Failed to download document: {}", message);
    match status {
        401 => Error::authentication(message),
        404 => Error::not_found(message),
        _ => Error::Api {
            message,
            status: Some(status),
            code: None,
        },
    }
}

fn message_of(value: &Value) -> Option<String> {
    match value.get("message")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
