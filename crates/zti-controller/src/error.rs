//! Controller error types.

use thiserror::Error;

/// Outcome classes of a tag schema fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Ok,
    Forbidden,
    NotFound,
    UnknownError,
}

/// Errors that can occur when talking to the controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API key cannot read this network (HTTP 403).
    #[error("API key does not have access to ZeroTier network {network_id}")]
    Forbidden {
        /// Network id from the request.
        network_id: String,
    },

    /// The network does not exist (HTTP 404).
    #[error("ZeroTier network {network_id} not found")]
    NotFound {
        /// Network id from the request.
        network_id: String,
    },

    /// Any other non-success status on the network fetch.
    #[error("Unknown ZeroTier network error (HTTP {status})")]
    Unknown {
        /// HTTP status code returned by the controller.
        status: u16,
    },

    /// Controller API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the controller.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a controller response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The network's tag schema is malformed.
    #[error(transparent)]
    Schema(#[from] zti_core::CoreError),

    /// The controller did not answer its status endpoint.
    #[error("ZeroTier controller at {url} is not responding")]
    Unavailable {
        /// Base URL that was probed.
        url: String,
    },

    /// The controller section of the configuration is unusable.
    #[error(transparent)]
    Config(#[from] zti_config::ConfigError),
}

impl ControllerError {
    /// Classify this error as a tag schema fetch outcome.
    #[must_use]
    pub const fn outcome(&self) -> FetchOutcome {
        match self {
            Self::Forbidden { .. } => FetchOutcome::Forbidden,
            Self::NotFound { .. } => FetchOutcome::NotFound,
            _ => FetchOutcome::UnknownError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_network() {
        let err = ControllerError::Forbidden {
            network_id: "8056c2e21c000001".into(),
        };
        assert_eq!(
            err.to_string(),
            "API key does not have access to ZeroTier network 8056c2e21c000001"
        );

        let err = ControllerError::NotFound {
            network_id: "8056c2e21c000001".into(),
        };
        assert_eq!(err.to_string(), "ZeroTier network 8056c2e21c000001 not found");
    }

    #[test]
    fn outcome_classification() {
        let forbidden = ControllerError::Forbidden {
            network_id: "n".into(),
        };
        let missing = ControllerError::NotFound {
            network_id: "n".into(),
        };
        let unknown = ControllerError::Unknown { status: 500 };
        assert_eq!(forbidden.outcome(), FetchOutcome::Forbidden);
        assert_eq!(missing.outcome(), FetchOutcome::NotFound);
        assert_eq!(unknown.outcome(), FetchOutcome::UnknownError);
    }
}
