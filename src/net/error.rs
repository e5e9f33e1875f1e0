//! Error type for API calls.
//!
//! The server's error payload is carried through unmodified so callers can
//! tell field-level validation detail apart from a generic failure. Nothing
//! in this module retries or transforms a failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A single field-level validation error from the server.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Structured error body the server returns on 4xx/5xx.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub message: String,
    pub errors: Vec<FieldError>,
}

/// Failure of a single API call.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection reset, CORS, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The request exceeded the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// The server answered with a non-success status.
    #[error("request rejected with status {status}")]
    Status { status: u16, body: ApiErrorBody },
}

impl ApiError {
    /// Human-readable message, preferring the server's own wording.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { status, body } => {
                if body.message.is_empty() {
                    format!("request rejected with status {status}")
                } else {
                    body.message.clone()
                }
            }
            other => other.to_string(),
        }
    }

    /// Field-level validation errors, if the server sent any.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ApiError::Status { body, .. } => &body.errors,
            _ => &[],
        }
    }

    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Missing or insufficient credentials (401/403).
    pub fn is_auth(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Parse a raw error response body into an `ApiError::Status`.
///
/// The body is decoded as the structured shape when possible; otherwise the
/// raw text (trimmed) becomes the message so the caller still sees something.
pub fn status_error(status: u16, text: &str) -> ApiError {
    let body = serde_json::from_str::<ApiErrorBody>(text).unwrap_or_else(|_| ApiErrorBody {
        message: text.trim().to_owned(),
        errors: Vec::new(),
    });
    ApiError::Status { status, body }
}
