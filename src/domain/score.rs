//! Final scores and extraction from phase-tagged upstream fragments.
//!
//! The provider reports goals per phase (`CURRENT`, `1ST_HALF`, `2ND_HALF`, ...)
//! and is known to omit the `CURRENT` phase for a while after a match ends.
//! [`extract_score`] resolves a final score through a fixed fallback chain
//! instead of reading a missing `CURRENT` phase as 0-0.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a match from the home side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

/// Goals scored by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    #[must_use]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    #[must_use]
    pub const fn outcome(self) -> Outcome {
        if self.home > self.away {
            Outcome::HomeWin
        } else if self.home < self.away {
            Outcome::AwayWin
        } else {
            Outcome::Draw
        }
    }

    const fn plus(self, other: Self) -> Self {
        Self::new(self.home + other.home, self.away + other.away)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Phase tag attached to an upstream score fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScorePhase {
    #[serde(rename = "CURRENT")]
    Current,
    #[serde(rename = "1ST_HALF")]
    FirstHalf,
    /// Cumulative score at the end of the second half.
    #[serde(rename = "2ND_HALF")]
    SecondHalf,
    /// Goals scored during the second half only.
    #[serde(rename = "2ND_HALF_ONLY")]
    SecondHalfOnly,
    #[serde(rename = "ET")]
    ExtraTime,
    #[serde(rename = "PENALTIES")]
    Penalties,
    #[serde(other)]
    Unknown,
}

/// One goal count reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFragment {
    pub phase: ScorePhase,
    pub side: Side,
    pub goals: u32,
}

impl ScoreFragment {
    #[must_use]
    pub const fn new(phase: ScorePhase, side: Side, goals: u32) -> Self {
        Self { phase, side, goals }
    }
}

/// Where an extracted score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// Read from a single phase.
    Phase(ScorePhase),
    /// `1ST_HALF` + `2ND_HALF_ONLY`.
    HalvesSum,
    /// No usable fragment; the score is a 0-0 placeholder.
    Defaulted,
}

impl ScoreSource {
    #[must_use]
    pub const fn is_defaulted(self) -> bool {
        matches!(self, Self::Defaulted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreExtraction {
    pub score: Score,
    pub source: ScoreSource,
}

const TERMINAL_PHASES: [ScorePhase; 3] = [
    ScorePhase::Penalties,
    ScorePhase::ExtraTime,
    ScorePhase::SecondHalf,
];

const PARTIAL_PHASES: [ScorePhase; 2] = [ScorePhase::FirstHalf, ScorePhase::SecondHalfOnly];

/// Resolve a score from phase-tagged fragments.
///
/// Priority: `CURRENT`, then the highest terminal phase (`PENALTIES` > `ET` >
/// `2ND_HALF`), then `1ST_HALF` + `2ND_HALF_ONLY`, then any single partial
/// phase, then 0-0 marked [`ScoreSource::Defaulted`]. A phase counts as present
/// when either side reports it; a missing side reads as 0.
#[must_use]
pub fn extract_score(fragments: &[ScoreFragment]) -> ScoreExtraction {
    let found = |source: ScoreSource, score: Score| ScoreExtraction { score, source };

    if let Some(score) = phase_score(fragments, ScorePhase::Current) {
        return found(ScoreSource::Phase(ScorePhase::Current), score);
    }

    for phase in TERMINAL_PHASES {
        if let Some(score) = phase_score(fragments, phase) {
            return found(ScoreSource::Phase(phase), score);
        }
    }

    let first = phase_score(fragments, ScorePhase::FirstHalf);
    let second = phase_score(fragments, ScorePhase::SecondHalfOnly);
    if let (Some(first), Some(second)) = (first, second) {
        return found(ScoreSource::HalvesSum, first.plus(second));
    }

    for phase in PARTIAL_PHASES {
        if let Some(score) = phase_score(fragments, phase) {
            return found(ScoreSource::Phase(phase), score);
        }
    }

    found(ScoreSource::Defaulted, Score::default())
}

fn phase_score(fragments: &[ScoreFragment], phase: ScorePhase) -> Option<Score> {
    let mut score = None::<Score>;
    for fragment in fragments.iter().filter(|f| f.phase == phase) {
        let entry = score.get_or_insert_with(Score::default);
        match fragment.side {
            Side::Home => entry.home = fragment.goals,
            Side::Away => entry.away = fragment.goals,
        }
    }
    score
}
