use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use super::snapshot::MeetSnapshot;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format minutes-as-float as "m:ss.t" clock time.
/// Non-finite times (the missing-time sentinel) render as an em dash.
pub fn format_time(minutes: f64) -> String {
    if !minutes.is_finite() || minutes < 0.0 {
        return "—".to_string();
    }
    // Work in tenths of a second so rounding carries into the minute.
    let tenths = (minutes * 600.0).round() as i64;
    let mins = tenths / 600;
    let secs = (tenths % 600) / 10;
    let tenth = tenths % 10;
    format!("{}:{:02}.{}", mins, secs, tenth)
}

fn format_points(points: Option<u32>) -> String {
    points.map_or_else(|| "—".to_string(), |p| p.to_string())
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the individual results as a table.
/// Columns: Place, Name, Team, Time, Points. No headers (minimal format).
/// Place column right-aligned (fits "999."), Points rendered as "—" when null.
pub fn format_individual_table(snapshot: &MeetSnapshot, use_colors: bool) -> String {
    if snapshot.individuals.is_empty() {
        return "No competitors.".to_string();
    }

    let term_width = get_terminal_width();
    let name_width = snapshot
        .individuals
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);
    let team_width = snapshot
        .individuals
        .iter()
        .map(|r| r.team.chars().count())
        .max()
        .unwrap_or(0);
    // Place (4) + gaps + time (7) + points (3)
    let fixed = 4 + 2 + team_width + 2 + 7 + 2 + 3;
    let name_width = match term_width {
        Some(w) if w > fixed + 12 => name_width.min(w - fixed - 2),
        Some(_) => name_width.min(20),
        None => name_width,
    };

    snapshot
        .individuals
        .iter()
        .map(|row| {
            let place = format!("{:>3}.", row.rank);
            let name = format!(
                "{:<width$}",
                truncate_name(&row.name, name_width),
                width = name_width
            );
            let team = format!("{:<width$}", row.team, width = team_width);
            let time = format!("{:>7}", format_time(row.time));
            let points = format!("{:>3}", format_points(row.points));

            if use_colors {
                format!(
                    "{}  {}  {}  {}  {}",
                    place.dimmed(),
                    name.bold(),
                    team.cyan(),
                    time,
                    points.yellow()
                )
            } else {
                format!("{}  {}  {}  {}  {}", place, name, team, time, points)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the team standings as a table.
/// Columns: Place, Team, Score. Unscored teams show "—".
pub fn format_team_table(snapshot: &MeetSnapshot, use_colors: bool) -> String {
    if snapshot.teams.is_empty() {
        return "No teams.".to_string();
    }

    let team_width = snapshot
        .teams
        .iter()
        .map(|r| r.team.chars().count())
        .max()
        .unwrap_or(0);

    snapshot
        .teams
        .iter()
        .map(|row| {
            let place = format!("{:>3}.", row.rank);
            let team = format!("{:<width$}", row.team, width = team_width);
            let score = format!(
                "{:>5}",
                row.score.map_or_else(|| "—".to_string(), |s| s.to_string())
            );

            if use_colors {
                format!("{}  {}  {}", place.dimmed(), team.cyan(), score.bold())
            } else {
                format!("{}  {}  {}", place, team, score)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the full snapshot as tab-separated values for scripting: individual
/// rows, a blank line, then team rows. Null points/scores are empty fields.
pub fn format_tsv(snapshot: &MeetSnapshot) -> String {
    let individuals = snapshot
        .individuals
        .iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                row.rank,
                row.name,
                row.team,
                format_time(row.time),
                row.points.map_or_else(String::new, |p| p.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let teams = snapshot
        .teams
        .iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}",
                row.rank,
                row.team,
                row.score.map_or_else(String::new, |s| s.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    if individuals.is_empty() && teams.is_empty() {
        String::new()
    } else {
        format!("{}\n\n{}", individuals, teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::snapshot::{IndividualRow, TeamRow};

    fn sample_snapshot() -> MeetSnapshot {
        MeetSnapshot {
            individuals: vec![
                IndividualRow {
                    rank: 1,
                    name: "Ava Reed".to_string(),
                    team: "North".to_string(),
                    time: 16.5,
                    points: Some(1),
                },
                IndividualRow {
                    rank: 2,
                    name: "Mia Cole".to_string(),
                    team: "South".to_string(),
                    time: 17.755,
                    points: None,
                },
            ],
            teams: vec![
                TeamRow {
                    rank: 1,
                    team: "North".to_string(),
                    score: Some(28),
                },
                TeamRow {
                    rank: 2,
                    team: "South".to_string(),
                    score: None,
                },
            ],
        }
    }

    #[test]
    fn test_format_time_basic() {
        assert_eq!(format_time(16.5), "16:30.0");
        assert_eq!(format_time(5.06), "5:03.6");
        assert_eq!(format_time(0.0), "0:00.0");
    }

    #[test]
    fn test_format_time_rounding_carries() {
        // 16.9999 minutes is within half a tenth of 17:00.0
        assert_eq!(format_time(16.9999), "17:00.0");
    }

    #[test]
    fn test_format_time_sentinel() {
        assert_eq!(format_time(f64::NAN), "—");
        assert_eq!(format_time(f64::INFINITY), "—");
        assert_eq!(format_time(-1.0), "—");
    }

    #[test]
    fn test_individual_table_rows() {
        let out = format_individual_table(&sample_snapshot(), false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("  1."));
        assert!(lines[0].contains("Ava Reed"));
        assert!(lines[0].contains("16:30.0"));
        assert!(lines[1].contains("Mia Cole"));
        assert!(lines[1].contains("—"));
    }

    #[test]
    fn test_individual_table_empty() {
        let snap = MeetSnapshot {
            individuals: vec![],
            teams: vec![],
        };
        assert_eq!(format_individual_table(&snap, false), "No competitors.");
    }

    #[test]
    fn test_team_table_unscored_dash() {
        let out = format_team_table(&sample_snapshot(), false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("North"));
        assert!(lines[0].contains("28"));
        assert!(lines[1].contains("South"));
        assert!(lines[1].contains("—"));
    }

    #[test]
    fn test_tsv_null_fields_empty() {
        let out = format_tsv(&sample_snapshot());
        let blocks: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        let ind: Vec<&str> = blocks[0].lines().collect();
        assert_eq!(ind[0], "1\tAva Reed\tNorth\t16:30.0\t1");
        assert_eq!(ind[1], "2\tMia Cole\tSouth\t17:45.3\t");
        let teams: Vec<&str> = blocks[1].lines().collect();
        assert_eq!(teams[0], "1\tNorth\t28");
        assert_eq!(teams[1], "2\tSouth\t");
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Short", 20), "Short");
        assert_eq!(truncate_name("A very long runner name", 10), "A very ...");
        assert_eq!(truncate_name("Abc", 3), "Abc");
    }
}
