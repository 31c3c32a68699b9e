//! Pre-match decimal odds and favorite detection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::score::Side;

/// Decimal odds for the three match outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Odds {
    pub home: Decimal,
    pub draw: Decimal,
    pub away: Decimal,
}

/// Implied outcome probabilities with the bookmaker margin removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpliedProbabilities {
    pub home: Decimal,
    pub draw: Decimal,
    pub away: Decimal,
}

impl Odds {
    #[must_use]
    pub const fn new(home: Decimal, draw: Decimal, away: Decimal) -> Self {
        Self { home, draw, away }
    }

    /// Decimal odds must be strictly greater than 1 to mean anything.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.home, self.draw, self.away]
            .iter()
            .all(|o| *o > Decimal::ONE)
    }

    /// Normalised implied probabilities, or `None` for invalid odds.
    #[must_use]
    pub fn implied(&self) -> Option<ImpliedProbabilities> {
        if !self.is_valid() {
            return None;
        }
        let home = Decimal::ONE / self.home;
        let draw = Decimal::ONE / self.draw;
        let away = Decimal::ONE / self.away;
        let book = home + draw + away;
        Some(ImpliedProbabilities {
            home: home / book,
            draw: draw / book,
            away: away / book,
        })
    }

    /// The side favored by at least `margin` of implied probability over both
    /// other outcomes. `None` means no clear favorite.
    #[must_use]
    pub fn favorite(&self, margin: Decimal) -> Option<Side> {
        let p = self.implied()?;
        if p.home - p.draw.max(p.away) >= margin {
            Some(Side::Home)
        } else if p.away - p.draw.max(p.home) >= margin {
            Some(Side::Away)
        } else {
            None
        }
    }
}
