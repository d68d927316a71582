use serde::Serialize;

use crate::meet::Meet;

/// One row of the individual results view: the full roster ordered ascending
/// by finish time, displayed rank included.
#[derive(Debug, Clone, Serialize)]
pub struct IndividualRow {
    pub rank: u32,
    pub name: String,
    pub team: String,
    pub time: f64,
    pub points: Option<u32>,
}

/// One row of the team standings, in scoring order.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRow {
    pub rank: u32,
    pub team: String,
    pub score: Option<u32>,
}

/// What the presentation and export collaborators consume. Regenerate after
/// every recompute; a snapshot is a copy, not a live view.
#[derive(Debug, Clone, Serialize)]
pub struct MeetSnapshot {
    pub individuals: Vec<IndividualRow>,
    pub teams: Vec<TeamRow>,
}

pub fn snapshot(meet: &Meet) -> MeetSnapshot {
    let individuals = meet
        .field_order()
        .iter()
        .enumerate()
        .filter_map(|(idx, id)| {
            meet.competitor(*id).map(|c| IndividualRow {
                rank: idx as u32 + 1,
                name: c.name.clone(),
                team: c.team.clone(),
                time: c.finish_time,
                points: c.points,
            })
        })
        .collect();

    let teams = meet
        .team_order()
        .iter()
        .enumerate()
        .map(|(idx, name)| TeamRow {
            rank: idx as u32 + 1,
            team: name.clone(),
            score: meet.team(name).and_then(|t| t.score),
        })
        .collect();

    MeetSnapshot { individuals, teams }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{recompute, ScoringRules};

    #[test]
    fn test_snapshot_orders_and_ranks() {
        let mut meet = Meet::new();
        meet.add_competitor("Slow", "North", 19.0, None);
        meet.add_competitor("Fast", "South", 16.0, None);
        meet.add_competitor("Mid", "North", 17.0, None);
        recompute(&mut meet, &ScoringRules::default());

        let snap = snapshot(&meet);
        let names: Vec<_> = snap.individuals.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Fast", "Mid", "Slow"]);
        assert_eq!(snap.individuals[0].rank, 1);
        assert_eq!(snap.individuals[2].rank, 3);
        // Both teams are short of five scorers.
        assert!(snap.teams.iter().all(|t| t.score.is_none()));
        assert_eq!(snap.teams.len(), 2);
    }

    #[test]
    fn test_snapshot_serializes_null_points() {
        let mut meet = Meet::new();
        meet.add_competitor("Only", "North", 16.0, None);
        recompute(&mut meet, &ScoringRules::default());

        let json = serde_json::to_string(&snapshot(&meet)).unwrap();
        assert!(json.contains("\"points\":1"));
        assert!(json.contains("\"score\":null"));
    }
}
