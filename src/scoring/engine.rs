use std::cmp::Ordering;

use crate::meet::{CompetitorId, Meet};

use super::rules::ScoringRules;

/// Re-derive every scoring field from the current roster. Full deterministic
/// pass, run after any mutation; derived state must not be read before it.
///
/// Five ordered stages, each feeding the next:
/// 1. per-team displacer marking (fastest `eligible_per_team` of each team)
/// 2. meet-wide ranking of all displacers by time (`effective_rank` 1..K)
/// 3. points = effective rank, for each team's fastest `counted_per_team`
/// 4. team score = sum of its lowest `counted_per_team` points, or None if
///    the team cannot field that many scorers
/// 5. team ordering, lowest score first, unscored teams last
///
/// Never fails: missing or NaN times sort as +inf (see `Competitor::sort_key`),
/// ties break by insertion order.
pub fn recompute(meet: &mut Meet, rules: &ScoringRules) {
    // Every team member must resolve in the arena; a dangling id is a roster
    // bug, not a recoverable state.
    debug_assert!(meet
        .teams
        .values()
        .flat_map(|t| &t.members)
        .all(|id| meet.competitor(*id).is_some()));

    // Stage 1: per-team time order, fastest eligible_per_team displace.
    let team_orders: Vec<(String, Vec<CompetitorId>)> = meet
        .teams
        .values()
        .map(|t| (t.name.clone(), sort_by_time(meet, &t.members)))
        .collect();

    for (_, order) in &team_orders {
        for (idx, id) in order.iter().enumerate() {
            if let Some(c) = meet.competitor_mut(*id) {
                c.eligible = idx < rules.eligible_per_team;
            }
        }
    }

    // Stage 2: global ranking over all displacers.
    let eligible_ids: Vec<CompetitorId> = meet
        .competitors
        .iter()
        .filter(|c| c.eligible)
        .map(|c| c.id)
        .collect();
    let ranked = sort_by_time(meet, &eligible_ids);
    for c in meet.competitors.iter_mut() {
        c.effective_rank = None;
    }
    for (idx, id) in ranked.iter().enumerate() {
        if let Some(c) = meet.competitor_mut(*id) {
            c.effective_rank = Some(idx as u32 + 1);
        }
    }

    // Stage 3: points for each team's fastest counted_per_team, reusing the
    // stage-1 order. Pure displacers and ineligible competitors get none.
    for (_, order) in &team_orders {
        for (idx, id) in order.iter().enumerate() {
            if let Some(c) = meet.competitor_mut(*id) {
                c.points = if idx < rules.counted_per_team {
                    c.effective_rank
                } else {
                    None
                };
            }
        }
    }

    // Stage 4: team scores.
    let scores: Vec<(String, Vec<u32>, Option<u32>)> = meet
        .teams
        .values()
        .map(|t| {
            let mut components: Vec<u32> = t
                .members
                .iter()
                .filter_map(|id| meet.competitor(*id).and_then(|c| c.points))
                .collect();
            components.sort_unstable();
            components.truncate(rules.counted_per_team);
            let score = if components.len() == rules.counted_per_team {
                Some(components.iter().sum())
            } else {
                None
            };
            (t.name.clone(), components, score)
        })
        .collect();
    for (name, components, score) in scores {
        if let Some(t) = meet.teams.get_mut(&name) {
            t.score_components = components;
            t.score = score;
        }
    }

    // Stage 5: prune and order. Roster mutations already drop empty teams,
    // pruning here keeps the invariant even if a caller slips.
    meet.teams.retain(|_, t| !t.members.is_empty());
    let mut order: Vec<(String, Option<u32>)> = meet
        .teams
        .values()
        .map(|t| (t.name.clone(), t.score))
        .collect();
    order.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    meet.team_order = order.into_iter().map(|(name, _)| name).collect();
}

fn sort_by_time(meet: &Meet, ids: &[CompetitorId]) -> Vec<CompetitorId> {
    let mut sorted: Vec<CompetitorId> = ids.to_vec();
    sorted.sort_by(|a, b| {
        let ka = meet
            .competitor(*a)
            .map(|c| c.sort_key())
            .unwrap_or(f64::INFINITY);
        let kb = meet
            .competitor(*b)
            .map(|c| c.sort_key())
            .unwrap_or(f64::INFINITY);
        ka.partial_cmp(&kb).unwrap_or(Ordering::Equal).then(a.cmp(b))
    });
    sorted
}
