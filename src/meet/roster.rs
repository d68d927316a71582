use super::types::{Competitor, CompetitorId, Meet, Team};

impl Meet {
    /// Add a competitor, lazily creating their team. Returns the new id.
    /// Derived fields start cleared and are stale until the next recompute.
    pub fn add_competitor(
        &mut self,
        name: &str,
        team: &str,
        finish_time: f64,
        original_place: Option<u32>,
    ) -> CompetitorId {
        debug_assert!(!name.is_empty() && !team.is_empty());
        let id = self.alloc_id();
        self.competitors.push(Competitor {
            id,
            name: name.to_string(),
            team: team.to_string(),
            original_place,
            finish_time,
            eligible: false,
            effective_rank: None,
            points: None,
        });
        self.teams
            .entry(team.to_string())
            .or_insert_with(|| Team::new(team))
            .members
            .push(id);
        id
    }

    /// Remove a competitor. Idempotent: an unknown id is a no-op. A team left
    /// with no members is dropped from the meet.
    pub fn remove_competitor(&mut self, id: CompetitorId) {
        let Some(pos) = self.competitors.iter().position(|c| c.id == id) else {
            return;
        };
        let team = self.competitors.remove(pos).team;
        self.detach_from_team(&team, id);
    }

    /// Move a competitor to another team, creating it if absent and dropping
    /// the old team if it becomes empty. Empty or identical names are no-ops.
    pub fn reassign_team(&mut self, id: CompetitorId, new_team: &str) {
        if new_team.is_empty() {
            return;
        }
        let Some(old_team) = self.competitor(id).map(|c| c.team.clone()) else {
            return;
        };
        if old_team == new_team {
            return;
        }
        self.detach_from_team(&old_team, id);
        self.teams
            .entry(new_team.to_string())
            .or_insert_with(|| Team::new(new_team))
            .members
            .push(id);
        if let Some(c) = self.competitor_mut(id) {
            c.team = new_team.to_string();
        }
    }

    /// Rename a competitor. Names carry no uniqueness constraint.
    pub fn rename_competitor(&mut self, id: CompetitorId, new_name: &str) {
        if let Some(c) = self.competitor_mut(id) {
            c.name = new_name.to_string();
        }
    }

    fn detach_from_team(&mut self, team: &str, id: CompetitorId) {
        if let Some(t) = self.teams.get_mut(team) {
            t.members.retain(|m| *m != id);
            if t.members.is_empty() {
                self.teams.remove(team);
                self.team_order.retain(|n| n != team);
            }
        }
    }
}
