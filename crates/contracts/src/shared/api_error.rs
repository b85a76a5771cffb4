//! Error taxonomy for calls to the remote REST endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::i18n::MessageKey;

/// `code` value the gateway puts in a 502 body when the upstream is unreachable.
pub const UPSTREAM_UNREACHABLE_CODE: &str = "UPSTREAM_UNREACHABLE";

/// Body the gateway returns for its own failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayErrorBody {
    pub code: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The browser reported no connectivity; no request was attempted.
    #[error("offline")]
    Offline,

    #[error("HTTP error! status: {status}, message: {message}")]
    HttpStatus { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// A 2xx response whose body does not have the expected shape.
    #[error("invalid response format: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Build an error from a non-2xx response.
    ///
    /// A gateway 502 tagged `UPSTREAM_UNREACHABLE` is reported as a transport
    /// failure. Otherwise the message is taken from the body's `message` field,
    /// then its `error` field, then a generic status text.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 502 {
            if let Ok(gateway) = serde_json::from_str::<GatewayErrorBody>(body) {
                if gateway.code == UPSTREAM_UNREACHABLE_CODE {
                    return ApiError::Transport(gateway.error);
                }
            }
        }
        let message = extract_error_message(body)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ApiError::HttpStatus { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the user for a failed login.
    pub fn message_key(&self) -> MessageKey {
        match self {
            ApiError::Offline => MessageKey::Offline,
            ApiError::Transport(_) => MessageKey::NetworkError,
            ApiError::HttpStatus { status: 401, .. } => MessageKey::InvalidCredentials,
            ApiError::HttpStatus { status: 403, .. } => MessageKey::AccessDenied,
            ApiError::HttpStatus { status: 500, .. } => MessageKey::ServerError,
            ApiError::HttpStatus { .. } | ApiError::MalformedResponse(_) => MessageKey::LoginFailed,
        }
    }
}

/// Best-effort extraction of `message` or `error` from a JSON error body.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"].iter().find_map(|field| {
        value
            .get(*field)
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        let cases = [
            (401, MessageKey::InvalidCredentials),
            (403, MessageKey::AccessDenied),
            (500, MessageKey::ServerError),
            (404, MessageKey::LoginFailed),
            (502, MessageKey::LoginFailed),
            (503, MessageKey::LoginFailed),
        ];
        for (status, key) in cases {
            assert_eq!(ApiError::from_response(status, "").message_key(), key, "{}", status);
        }
    }

    #[test]
    fn test_transport_and_offline_messages() {
        assert_eq!(
            ApiError::Transport("connection refused".into()).message_key(),
            MessageKey::NetworkError
        );
        assert_eq!(ApiError::Offline.message_key(), MessageKey::Offline);
        assert_eq!(
            ApiError::MalformedResponse("not an array".into()).message_key(),
            MessageKey::LoginFailed
        );
    }

    #[test]
    fn test_message_extraction() {
        assert_eq!(
            extract_error_message(r#"{"message":"Bad password","error":"x"}"#).as_deref(),
            Some("Bad password")
        );
        assert_eq!(
            extract_error_message(r#"{"error":"Unauthorized"}"#).as_deref(),
            Some("Unauthorized")
        );
        assert_eq!(extract_error_message(r#"{"message":""}"#), None);
        assert_eq!(extract_error_message("<html>"), None);

        match ApiError::from_response(401, r#"{"error":"Unauthorized"}"#) {
            ApiError::HttpStatus { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_gateway_unreachable_is_transport() {
        let body = r#"{"code":"UPSTREAM_UNREACHABLE","error":"connect timeout"}"#;
        assert_eq!(
            ApiError::from_response(502, body),
            ApiError::Transport("connect timeout".into())
        );
        // Other 502 bodies stay HTTP errors
        assert_eq!(ApiError::from_response(502, r#"{"error":"bad"}"#).status(), Some(502));
    }
}
