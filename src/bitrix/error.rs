use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a stage from being submitted or its reply from being read.
///
/// A webhook answering `result: false` is not one of these; that is a
/// [`StageOutcome::Rejected`](crate::bitrix::StageOutcome::Rejected).
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Failed to reach webhook: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode webhook response as JSON (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidWebhook { url: String, reason: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StageError {
    /// Whether the failure came from outside the user's input (network, remote, filesystem)
    pub fn is_internal(&self) -> bool {
        !matches!(self, StageError::InvalidWebhook { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_webhook_is_user_error() {
        let err = StageError::InvalidWebhook {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(!err.is_internal());
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_decode_is_internal() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = StageError::Decode { status: 502, source };
        assert!(err.is_internal());
        assert!(err.to_string().contains("HTTP 502"));
    }
}
