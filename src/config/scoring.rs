//! Scoring rule configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::domain::{ScoringRules, DEFAULT_FAVORITE_MARGIN};

/// Point values and multipliers for the standard scorer.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_exact_points")]
    pub exact_points: i64,
    #[serde(default = "default_outcome_points")]
    pub outcome_points: i64,
    /// Points for a wrong outcome; zero or negative.
    #[serde(default)]
    pub wrong_points: i64,
    /// Points for not betting on a finished match; zero or negative.
    #[serde(default = "default_no_bet_points")]
    pub no_bet_points: i64,
    #[serde(default = "default_draw_multiplier")]
    pub draw_multiplier: Decimal,
    #[serde(default = "default_outsider_multiplier")]
    pub outsider_multiplier: Decimal,
    /// Implied-probability lead for a clear favorite, in [0, 1).
    #[serde(default = "default_favorite_margin")]
    pub favorite_margin: Decimal,
}

const fn default_exact_points() -> i64 {
    3
}

const fn default_outcome_points() -> i64 {
    1
}

const fn default_no_bet_points() -> i64 {
    -1
}

fn default_draw_multiplier() -> Decimal {
    dec!(1.5)
}

fn default_outsider_multiplier() -> Decimal {
    dec!(2)
}

const fn default_favorite_margin() -> Decimal {
    DEFAULT_FAVORITE_MARGIN
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_points: default_exact_points(),
            outcome_points: default_outcome_points(),
            wrong_points: 0,
            no_bet_points: default_no_bet_points(),
            draw_multiplier: default_draw_multiplier(),
            outsider_multiplier: default_outsider_multiplier(),
            favorite_margin: default_favorite_margin(),
        }
    }
}

impl From<ScoringConfig> for ScoringRules {
    fn from(config: ScoringConfig) -> Self {
        Self {
            exact_points: config.exact_points,
            outcome_points: config.outcome_points,
            wrong_points: config.wrong_points,
            no_bet_points: config.no_bet_points,
            draw_multiplier: config.draw_multiplier,
            outsider_multiplier: config.outsider_multiplier,
            favorite_margin: config.favorite_margin,
        }
    }
}
