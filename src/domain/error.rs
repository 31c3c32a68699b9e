//! Domain validation errors.
//!
//! These errors are returned when input crosses the domain boundary with
//! values that violate an invariant. Nothing is applied when one is returned.

use thiserror::Error;

use super::id::{MatchKey, PlayerId};

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Predicted goals must be non-negative.
    #[error("predicted goals must be non-negative, got {home}-{away}")]
    NegativeGoals {
        /// Predicted home goals as submitted.
        home: i64,
        /// Predicted away goals as submitted.
        away: i64,
    },

    /// The provider sent a status code we do not recognise.
    #[error("unknown match status code '{code}'")]
    UnknownStatus {
        /// The raw upstream code.
        code: String,
    },

    /// A fixture from another competition or season was offered to a game.
    #[error("fixture {key} does not belong to {competition} {season}")]
    ForeignFixture {
        key: MatchKey,
        competition: String,
        season: String,
    },

    #[error("unknown match {0}")]
    UnknownMatch(MatchKey),

    #[error("player {0} is not part of this game")]
    UnknownPlayer(PlayerId),

    /// Scoring was requested for a match that has not finished.
    #[error("match {0} is not finished")]
    MatchNotFinished(MatchKey),

    /// No usable score fragment was found for a finished match.
    ///
    /// Recovered by defaulting to 0-0; surfaced only through logs.
    #[error("no usable score data for finished match {0}, defaulted to 0-0")]
    InconsistentScoreData(MatchKey),
}
