use serde::{Deserialize, Serialize};

/// Cross-country scoring rules. The defaults are the customary rule: a team's
/// first 7 finishers displace, its first 5 score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// How many of a team's fastest finishers count toward meet-wide ranking
    /// ("displacers").
    pub eligible_per_team: usize,
    /// How many of a team's fastest finishers score points. Must not exceed
    /// `eligible_per_team`.
    pub counted_per_team: usize,
    /// Gap, in minutes, used when the re-rank solver places a competitor ahead
    /// of the field or behind it.
    pub epsilon: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            eligible_per_team: 7,
            counted_per_team: 5,
            epsilon: 0.05,
        }
    }
}
