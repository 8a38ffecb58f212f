//! Campaign mode: a ladder of districts fought by one persistent player.

mod ladder;
mod result;
mod rewards;

pub use ladder::Campaign;
pub use result::{MatchResult, Stage};
pub use rewards::Unlocks;
