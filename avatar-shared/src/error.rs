use thiserror::Error;

/// Message shown to the user whenever the avatar batch cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load avatars. Please try again later.";

/// The single failure kind of the avatar fetch.
///
/// Transport errors, non-success statuses and undecodable bodies all collapse
/// into this type; `cause` only exists for diagnostics.
#[derive(Debug, Error)]
#[error("Failed to fetch users: {cause}")]
pub struct FetchFailure {
    cause: String,
}

impl FetchFailure {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// The fixed banner text, independent of the cause.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        FetchFailure::new(err.to_string())
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        FetchFailure::new(format!("invalid response body: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_ignores_cause() {
        let timeout = FetchFailure::new("operation timed out");
        let not_found = FetchFailure::new("unexpected status 404 Not Found");
        assert_eq!(timeout.user_message(), LOAD_FAILED_MESSAGE);
        assert_eq!(not_found.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn test_display_includes_cause() {
        let err = FetchFailure::new("unexpected status 500 Internal Server Error");
        assert_eq!(
            err.to_string(),
            "Failed to fetch users: unexpected status 500 Internal Server Error"
        );
        assert_eq!(err.cause(), "unexpected status 500 Internal Server Error");
    }
}
