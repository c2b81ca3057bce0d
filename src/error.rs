//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// A resource accessor failed; `context` names the resource
    /// (e.g. "Failed to fetch portfolio").
    #[error("{context}: {source}")]
    Resource {
        context: String,
        #[source]
        source: HttpError,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// The transport error behind this failure, if any.
    pub fn http(&self) -> Option<&HttpError> {
        match self {
            SdkError::Resource { source, .. } => Some(source),
            SdkError::Http(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status code when the backend answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self.http() {
            Some(HttpError::Api { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// True when the backend could not be reached at all.
    pub fn is_network(&self) -> bool {
        matches!(self.http(), Some(HttpError::Network { .. }))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error(
        "Network error: Unable to connect to API at {url}. Make sure the backend server is running."
    )]
    Network { url: String },

    #[error("API request failed: {status} {status_text}. {body}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl HttpError {
    /// Wrap with a resource-specific prefix.
    pub fn context(self, context: impl Into<String>) -> SdkError {
        SdkError::Resource {
            context: context.into(),
            source: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status_and_body() {
        let err = HttpError::Api {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: "db down".to_string(),
        }
        .context("Failed to fetch portfolio");

        let msg = err.to_string();
        assert_eq!(
            msg,
            "Failed to fetch portfolio: API request failed: 500 Internal Server Error. db down"
        );
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_network());
    }

    #[test]
    fn test_network_error_mentions_backend() {
        let err = HttpError::Network {
            url: "http://localhost:4000/health".to_string(),
        }
        .context("Health check failed");

        let msg = err.to_string();
        assert!(msg.starts_with("Health check failed: Network error"));
        assert!(msg.contains("http://localhost:4000/health"));
        assert!(msg.contains("Make sure the backend server is running"));
        assert!(err.is_network());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_error_has_no_transport_source() {
        let err = SdkError::Config("bad url".to_string());
        assert!(err.http().is_none());
        assert_eq!(err.to_string(), "Configuration error: bad url");
    }
}
