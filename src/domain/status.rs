//! Match status and mapping from upstream status codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Lifecycle of a fixture. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    /// Any in-play state: halves, break, extra time, shoot-out.
    Started,
    Finished,
}

impl MatchStatus {
    /// Map an upstream status code to a status.
    ///
    /// Unknown codes fail closed. Postponed, cancelled and abandoned fixtures
    /// are deliberately not mapped so they can never be mistaken for finished.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "NS" | "TBD" => Ok(Self::Scheduled),
            "1H" | "HT" | "2H" | "ET" | "BT" | "P" | "LIVE" | "INT" | "SUSP" => Ok(Self::Started),
            "FT" | "AET" | "PEN" => Ok(Self::Finished),
            _ => Err(DomainError::UnknownStatus {
                code: code.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }

    #[must_use]
    pub const fn is_started(self) -> bool {
        matches!(self, Self::Started)
    }

    #[must_use]
    pub const fn is_scheduled(self) -> bool {
        matches!(self, Self::Scheduled)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Scheduled => "scheduled",
            Self::Started => "started",
            Self::Finished => "finished",
        };
        f.write_str(label)
    }
}
