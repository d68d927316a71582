use serde::{Deserialize, Serialize};

use crate::scoring::ScoringRules;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub scoring: Option<ScoringRules>,
}

impl Config {
    /// Scoring rules from the config file, or the standard cross-country rule
    /// when none are configured.
    pub fn effective_rules(&self) -> ScoringRules {
        self.scoring.clone().unwrap_or_default()
    }
}
