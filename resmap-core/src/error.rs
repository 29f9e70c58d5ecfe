use thiserror::Error;

/// Why a request issued by the client did not succeed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Failure {
    /// Network unreachable or unreadable response.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response of the backend.
    #[error(transparent)]
    Rejected(#[from] resmap_boundary::Error),
}

impl Failure {
    /// The reason reported by the backend, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Transport(_) => None,
            Self::Rejected(err) => err.reason(),
        }
    }

    /// The backend reason or the given fallback.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.reason().unwrap_or(fallback).to_owned()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("Geolocation not supported")]
    Unsupported,
    #[error("Failed to get location")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_of_rejected_request() {
        let err = Failure::from(resmap_boundary::Error {
            http_status: 400,
            error: Some("Invalid data".into()),
            message: None,
        });
        assert_eq!(err.message_or("Failed to add resource"), "Invalid data");
    }

    #[test]
    fn fallback_message() {
        let err = Failure::from(resmap_boundary::Error {
            http_status: 500,
            ..Default::default()
        });
        assert_eq!(err.message_or("Unauthorized"), "Unauthorized");
        let err = Failure::Transport("connection refused".into());
        assert_eq!(err.message_or("Unauthorized"), "Unauthorized");
    }
}
