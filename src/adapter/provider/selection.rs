//! Bookmaker preference at the adapter boundary.
//!
//! The core only ever sees one (home, draw, away) triplet. When several
//! bookmakers quote a match, the configured preference order decides, and
//! the first complete quote is the fallback.

use rust_decimal::Decimal;

use super::dto::BookmakerOdds;
use crate::domain::Odds;

/// Default preference: primary, then secondary.
pub const DEFAULT_BOOKMAKERS: [&str; 2] = ["Bet365", "Pinnacle"];

/// Pick one odds triplet following `preference`, then the first complete quote.
#[must_use]
pub fn select_odds(books: &[BookmakerOdds], preference: &[String]) -> Option<Odds> {
    preference
        .iter()
        .find_map(|name| {
            books
                .iter()
                .filter(|book| book.bookmaker.eq_ignore_ascii_case(name))
                .find_map(triplet)
        })
        .or_else(|| books.iter().find_map(triplet))
}

fn triplet(book: &BookmakerOdds) -> Option<Odds> {
    let value = |label: &str| -> Option<Decimal> {
        book.values
            .iter()
            .find(|v| v.label.eq_ignore_ascii_case(label))
            .map(|v| v.odd)
    };
    let odds = Odds::new(value("Home")?, value("Draw")?, value("Away")?);
    odds.is_valid().then_some(odds)
}
