//! Error types for the history pipeline.

use thiserror::Error;

/// Errors that can occur while loading or building the album history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Transport failure talking to the backend.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    #[error("unexpected status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body was well-formed JSON but not usable data.
    #[error("invalid response: {0}")]
    Data(String),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single entry's scheduled date could not be parsed.
    #[error("invalid scheduled date {value:?}: {source}")]
    Parse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A configured URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = HistoryError::HttpStatus {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "upstream down".into(),
        };
        assert_eq!(err.to_string(), "unexpected status 502 Bad Gateway: upstream down");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HistoryError = json_err.into();
        assert!(matches!(err, HistoryError::Json(_)));
    }

    #[test]
    fn test_parse_error_names_the_value() {
        let source = chrono::NaiveDate::parse_from_str("nope", "%Y-%m-%d").unwrap_err();
        let err = HistoryError::Parse {
            value: "nope".into(),
            source,
        };
        assert!(err.to_string().contains("\"nope\""));
    }
}
