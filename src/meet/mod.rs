pub mod roster;
pub mod types;

pub use types::{Competitor, CompetitorId, Meet, Team};
