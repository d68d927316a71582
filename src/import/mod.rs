use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One finisher row as supplied by a results collector. `time` is either
/// minutes as a float or a "mm:ss.s" string; rows whose time cannot be read
/// (DNF, DNS, garbage) are dropped at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultRow {
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub place: Option<u32>,
    pub time: TimeField,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimeField {
    Minutes(f64),
    Clock(String),
}

impl ResultRow {
    /// Finish time in minutes, if the row carries a usable one.
    pub fn minutes(&self) -> Option<f64> {
        match &self.time {
            TimeField::Minutes(m) if m.is_finite() && *m > 0.0 => Some(*m),
            TimeField::Minutes(_) => None,
            TimeField::Clock(s) => parse_time_minutes(s),
        }
    }
}

/// Convert "mm:ss.s" to float minutes, rounded to 3 decimals. DNF/DNS and
/// anything else unparseable yields None.
pub fn parse_time_minutes(s: &str) -> Option<f64> {
    let upper = s.trim().to_ascii_uppercase();
    if upper == "DNF" || upper == "DNS" {
        return None;
    }
    let (min_str, sec_str) = upper.split_once(':')?;
    let minutes: u32 = min_str.trim().parse().ok()?;
    let seconds: f64 = sec_str.trim().parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let total = minutes as f64 + seconds / 60.0;
    Some((total * 1000.0).round() / 1000.0)
}

/// Load a JSON array of result rows from a file. Rows with an unusable time
/// are silently dropped, matching how collectors discard DNF/DNS finishers.
pub fn load_results(path: &Path) -> Result<Vec<ResultRow>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results file at {}", path.display()))?;
    let rows: Vec<ResultRow> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse results: invalid JSON in {}", path.display()))?;
    Ok(rows.into_iter().filter(|r| r.minutes().is_some()).collect())
}
