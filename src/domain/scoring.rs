//! Rules engine turning predictions for a finished match into points.
//!
//! # Model
//!
//! Every player on the roster gets exactly one [`Award`] per finished match:
//!
//! - **Exact**: both predicted goal counts match the final score.
//! - **Outcome**: home win / draw / away win is right, the score is not.
//! - **Wrong**: the predicted outcome is wrong.
//! - **No bet**: the player did not predict this match.
//!
//! When the pre-match odds name a clear favorite, a correct prediction is
//! multiplied: a draw by `draw_multiplier`, an outsider win by
//! `outsider_multiplier`, a favorite win by 1. Without a clear favorite there
//! is no bonus. Multiplied awards are rounded half away from zero.
//!
//! Scoring is pure. Guarding against scoring a match twice is the caller's job
//! (see [`Game::evaluate_finished_matches`](crate::application::Game::evaluate_finished_matches)).

use std::collections::HashMap;
use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::bet::Bet;
use super::error::DomainError;
use super::fixture::{Match, DEFAULT_FAVORITE_MARGIN};
use super::id::PlayerId;
use super::score::{Outcome, Side};

/// Point values and multipliers of the standard rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRules {
    pub exact_points: i64,
    pub outcome_points: i64,
    /// Awarded for a wrong outcome. Zero or negative.
    pub wrong_points: i64,
    /// Awarded when a player has no bet on a finished match.
    pub no_bet_points: i64,
    pub draw_multiplier: Decimal,
    pub outsider_multiplier: Decimal,
    /// Implied-probability lead a side needs to count as favorite.
    pub favorite_margin: Decimal,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            exact_points: 3,
            outcome_points: 1,
            wrong_points: 0,
            no_bet_points: -1,
            draw_multiplier: dec!(1.5),
            outsider_multiplier: dec!(2),
            favorite_margin: DEFAULT_FAVORITE_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardKind {
    Exact,
    Outcome,
    Wrong,
    NoBet,
}

/// Which odds-based bonus applied to an award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bonus {
    /// No clear favorite, or the prediction was wrong.
    None,
    /// Correctly backed the favorite.
    Favorite,
    /// Correctly predicted a draw against a favorite.
    Draw,
    /// Correctly predicted the outsider to win.
    Outsider,
}

/// Points for one player on one match, with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub kind: AwardKind,
    pub bonus: Bonus,
    pub points: i64,
}

impl fmt::Display for Award {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} ({:?}, bonus {:?})", self.points, self.kind, self.bonus)
    }
}

/// A scoring variant.
pub trait Scorer: Send + Sync + fmt::Debug {
    /// Score one player's bet (or lack of one) on a finished match.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MatchNotFinished`] if the match has no final score.
    fn score_bet(&self, fixture: &Match, bet: Option<&Bet>) -> Result<Award, DomainError>;

    /// Score every roster player on a finished match.
    ///
    /// Bets from players outside the roster are ignored. Output follows the
    /// roster order.
    fn score_match(
        &self,
        fixture: &Match,
        roster: &[PlayerId],
        bets: &[Bet],
    ) -> Result<Vec<(PlayerId, Award)>, DomainError> {
        let by_player: HashMap<&PlayerId, &Bet> = bets
            .iter()
            .filter(|bet| bet.match_key() == fixture.key())
            .map(|bet| (bet.player_id(), bet))
            .collect();

        roster
            .iter()
            .map(|player| {
                let award = self.score_bet(fixture, by_player.get(player).copied())?;
                Ok((player.clone(), award))
            })
            .collect()
    }

    /// Name for logging.
    fn name(&self) -> &'static str;
}

/// Exact / outcome / odds-bonus rules.
#[derive(Debug, Clone, Default)]
pub struct StandardScorer {
    rules: ScoringRules,
}

impl StandardScorer {
    #[must_use]
    pub const fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    fn bonus(&self, fixture: &Match, predicted: Outcome) -> Bonus {
        let Some(favorite) = fixture.favorite_side(self.rules.favorite_margin) else {
            return Bonus::None;
        };
        match (predicted, favorite) {
            (Outcome::Draw, _) => Bonus::Draw,
            (Outcome::HomeWin, Side::Home) | (Outcome::AwayWin, Side::Away) => Bonus::Favorite,
            _ => Bonus::Outsider,
        }
    }

    fn multiplier(&self, bonus: Bonus) -> Decimal {
        match bonus {
            Bonus::None | Bonus::Favorite => Decimal::ONE,
            Bonus::Draw => self.rules.draw_multiplier,
            Bonus::Outsider => self.rules.outsider_multiplier,
        }
    }
}

impl Scorer for StandardScorer {
    fn score_bet(&self, fixture: &Match, bet: Option<&Bet>) -> Result<Award, DomainError> {
        let actual = match fixture.goals() {
            Some(goals) if fixture.is_finished() => goals,
            _ => return Err(DomainError::MatchNotFinished(fixture.key().clone())),
        };

        let Some(bet) = bet else {
            return Ok(Award {
                kind: AwardKind::NoBet,
                bonus: Bonus::None,
                points: self.rules.no_bet_points,
            });
        };

        let predicted = bet.predicted();
        if predicted.outcome() != actual.outcome() {
            return Ok(Award {
                kind: AwardKind::Wrong,
                bonus: Bonus::None,
                points: self.rules.wrong_points,
            });
        }

        let (kind, base) = if predicted == actual {
            (AwardKind::Exact, self.rules.exact_points)
        } else {
            (AwardKind::Outcome, self.rules.outcome_points)
        };
        let bonus = self.bonus(fixture, predicted.outcome());
        let points = Decimal::from(base)
            .checked_mul(self.multiplier(bonus))
            .and_then(|points| {
                points
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_i64()
            })
            .unwrap_or_else(|| {
                let saturated = if base < 0 { i64::MIN } else { i64::MAX };
                warn!(base, bonus = ?bonus, points = saturated, "Award overflows, saturating");
                saturated
            });

        Ok(Award {
            kind,
            bonus,
            points,
        })
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
