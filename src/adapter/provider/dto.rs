//! Provider response payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::ScoreFragment;

#[derive(Debug, Deserialize)]
pub struct FixturesResponse {
    #[serde(default)]
    pub fixtures: Vec<FixtureDto>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureDto {
    #[serde(default)]
    pub id: Option<u64>,
    pub competition: String,
    pub season: String,
    pub home_team: String,
    pub away_team: String,
    pub matchday: u32,
    pub kickoff: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub scores: Vec<ScoreFragment>,
    #[serde(default)]
    pub odds: Vec<BookmakerOdds>,
}

/// Odds quoted by one bookmaker, one value per market label.
#[derive(Debug, Clone, Deserialize)]
pub struct BookmakerOdds {
    pub bookmaker: String,
    #[serde(default)]
    pub values: Vec<OddValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddValue {
    /// `Home`, `Draw` or `Away`.
    pub label: String,
    pub odd: Decimal,
}
