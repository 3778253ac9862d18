use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Rejected locally, never sent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Map a non-success response to an error, preferring the server's
    /// `{"error": ...}` message over the raw body.
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            reqwest::StatusCode::NOT_FOUND => ClientError::NotFound(message),
            reqwest::StatusCode::BAD_REQUEST => ClientError::BadRequest(message),
            other => ClientError::Status {
                status: other.as_u16(),
                message,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_body_message_is_extracted() {
        let err = ClientError::from_response(StatusCode::NOT_FOUND, r#"{"error":"Not found: board x"}"#);
        assert!(matches!(err, ClientError::NotFound(ref m) if m == "Not found: board x"));
    }

    #[test]
    fn test_plain_body_is_kept() {
        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, "upstream down\n");
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_request() {
        let err = ClientError::from_response(StatusCode::BAD_REQUEST, r#"{"error":"nope"}"#);
        assert!(matches!(err, ClientError::BadRequest(_)));
        assert!(!err.is_not_found());
    }
}
