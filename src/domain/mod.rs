//! Storage-agnostic domain types: fixtures, bets, scoring and standings.

mod bet;
mod entry;
mod fixture;
mod leaderboard;
mod odds;
mod player;
mod record;
mod score;
mod status;
mod update;

pub mod error;
pub mod id;
pub mod scoring;

pub use bet::Bet;
pub use entry::ScoreEntry;
pub use fixture::{Match, MatchChange, DEFAULT_FAVORITE_MARGIN};
pub use id::{GameId, MatchKey, PlayerId};
pub use leaderboard::{Leaderboard, Standing};
pub use odds::{ImpliedProbabilities, Odds};
pub use player::Player;
pub use record::GameRecord;
pub use score::{
    extract_score, Outcome, Score, ScoreExtraction, ScoreFragment, ScorePhase, ScoreSource, Side,
};
pub use scoring::{Award, AwardKind, Bonus, Scorer, ScoringRules, StandardScorer};
pub use status::MatchStatus;
pub use update::FixtureUpdate;
