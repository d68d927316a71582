use super::rules::ScoringRules;

/// Validate scoring rules at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_rules(rules: &ScoringRules) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if rules.eligible_per_team < 1 {
        errors.push("scoring.eligible_per_team: must be at least 1".to_string());
    }
    if rules.counted_per_team < 1 {
        errors.push("scoring.counted_per_team: must be at least 1".to_string());
    }
    if rules.counted_per_team > rules.eligible_per_team {
        errors.push(format!(
            "scoring.counted_per_team: {} exceeds eligible_per_team {}",
            rules.counted_per_team, rules.eligible_per_team
        ));
    }
    if !rules.epsilon.is_finite() || rules.epsilon <= 0.0 {
        errors.push(format!(
            "scoring.epsilon: must be a positive finite number, got {}",
            rules.epsilon
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
