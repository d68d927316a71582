pub mod engine;
pub mod rerank;
pub mod rules;
pub mod validation;

pub use engine::recompute;
pub use rerank::retime_to_rank;
pub use rules::ScoringRules;
pub use validation::validate_rules;
