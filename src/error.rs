//! Error types for the crate.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::{MatchKey, MatchStatus};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures talking to the upstream match-data provider.
///
/// None of these touch local state. The polling loop retries on the next
/// cycle regardless; [`FetchError::is_transient`] only picks the log level.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("fetch timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether the next poll cycle may succeed where this one failed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Unreachable(_) => true,
            Self::Status { status } => *status == 429 || *status >= 500,
            Self::Decode(_) => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { after_ms: 0 }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("bet for {match_key} can no longer be modified (kickoff {kickoff}, status {status})")]
    NotModifiable {
        match_key: MatchKey,
        kickoff: DateTime<Utc>,
        status: MatchStatus,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A repository could not complete a read or write.
    #[error("storage error: {0}")]
    Store(String),
}

impl Error {
    /// Errors a player can fix by changing their request.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::NotModifiable { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_fetch_errors() {
        assert!(FetchError::Timeout { after_ms: 1000 }.is_transient());
        assert!(FetchError::Unreachable("refused".into()).is_transient());
        assert!(FetchError::Status { status: 503 }.is_transient());
        assert!(FetchError::Status { status: 429 }.is_transient());
        assert!(!FetchError::Status { status: 404 }.is_transient());
        assert!(!FetchError::Decode("eof".into()).is_transient());
    }

    #[test]
    fn user_errors_are_validation_and_cutoff() {
        let negative: Error = DomainError::NegativeGoals { home: -1, away: 0 }.into();
        assert!(negative.is_user_error());
        assert!(!Error::from(FetchError::Status { status: 500 }).is_user_error());
        assert!(!Error::Store("disk full".into()).is_user_error());
    }
}
