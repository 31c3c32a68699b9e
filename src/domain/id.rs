//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player identifier - newtype for type safety.
///
/// Authenticated accounts get a UUID v4; guests get an id derived from the
/// sign-in provider and session so the same guest maps to the same player.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a `PlayerId` from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id for an authenticated account.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Derive the id of a guest player from its provider and session.
    #[must_use]
    pub fn guest(provider: &str, session: &str) -> Self {
        Self(format!("guest:{provider}:{session}"))
    }

    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.0.starts_with("guest:")
    }

    /// Get the player ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Game identifier - one per season, competition and player group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(String);

impl GameId {
    /// Create a new `GameId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the game ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GameId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Composite fixture identity.
///
/// Built from competition, season, both team names and the matchday, so it is
/// known before the provider assigns a numeric fixture id and survives any
/// churn in that id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchKey {
    competition: String,
    season: String,
    home_team: String,
    away_team: String,
    matchday: u32,
}

impl MatchKey {
    pub fn new(
        competition: impl Into<String>,
        season: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        matchday: u32,
    ) -> Self {
        Self {
            competition: competition.into(),
            season: season.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            matchday,
        }
    }

    #[must_use]
    pub fn competition(&self) -> &str {
        &self.competition
    }

    #[must_use]
    pub fn season(&self) -> &str {
        &self.season
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[must_use]
    pub const fn matchday(&self) -> u32 {
        self.matchday
    }

    /// Whether this fixture belongs to the given competition and season.
    #[must_use]
    pub fn belongs_to(&self, competition: &str, season: &str) -> bool {
        self.competition == competition && self.season == season
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.competition, self.season, self.home_team, self.away_team, self.matchday
        )
    }
}
