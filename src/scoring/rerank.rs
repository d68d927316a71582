use crate::meet::{CompetitorId, Meet};

use super::rules::ScoringRules;

/// Give a competitor a finish time consistent with a requested position in the
/// field, without asking the user for a time.
///
/// `field` is the full roster ordered ascending by time (`Meet::field_order`),
/// `desired_rank` is 1-based within it. Out-of-range ranks and ids not present
/// in the field are silently ignored. Placement is approximate: rank 1 goes
/// epsilon ahead of the current leader, last place epsilon behind the current
/// last, anything else lands on the midpoint of the two times bracketing the
/// target slot. Callers must recompute() afterward; the authoritative rank can
/// differ from the request when times cluster.
pub fn retime_to_rank(
    meet: &mut Meet,
    id: CompetitorId,
    desired_rank: usize,
    field: &[CompetitorId],
    rules: &ScoringRules,
) {
    let n = field.len();
    if desired_rank < 1 || desired_rank > n {
        return;
    }
    let Some(old_idx) = field.iter().position(|f| *f == id) else {
        return;
    };
    let time_at = |i: usize| {
        meet.competitor(field[i])
            .map(|c| c.sort_key())
            .unwrap_or(f64::INFINITY)
    };

    let moving_down = desired_rank > old_idx + 1;
    let new_time = if desired_rank == 1 {
        time_at(0) - rules.epsilon
    } else if desired_rank == n {
        time_at(n - 1) + rules.epsilon
    } else if moving_down {
        // Moving down: split the target slot and the one below it.
        (time_at(desired_rank - 1) + time_at(desired_rank)) / 2.0
    } else {
        // Moving up: split the slot above the target and the target itself.
        (time_at(desired_rank - 2) + time_at(desired_rank - 1)) / 2.0
    };

    if let Some(c) = meet.competitor_mut(id) {
        c.finish_time = new_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::recompute;

    fn sample_meet() -> Meet {
        let mut meet = Meet::new();
        for (i, name) in ["Ana", "Bea", "Cam", "Dee", "Eve"].iter().enumerate() {
            let team = if i % 2 == 0 { "North" } else { "South" };
            meet.add_competitor(name, team, 16.0 + i as f64, None);
        }
        meet
    }

    #[test]
    fn test_move_to_first_lands_epsilon_ahead() {
        let mut meet = sample_meet();
        let rules = ScoringRules::default();
        let field = meet.field_order();
        let cam = meet.find_by_name("Cam").unwrap();

        retime_to_rank(&mut meet, cam, 1, &field, &rules);
        let cam_time = meet.competitor(cam).unwrap().finish_time;
        assert!((cam_time - (16.0 - rules.epsilon)).abs() < 1e-9);

        recompute(&mut meet, &rules);
        assert_eq!(meet.competitor(cam).unwrap().effective_rank, Some(1));
    }

    #[test]
    fn test_move_to_last_lands_epsilon_behind() {
        let mut meet = sample_meet();
        let rules = ScoringRules::default();
        let field = meet.field_order();
        let bea = meet.find_by_name("Bea").unwrap();

        retime_to_rank(&mut meet, bea, 5, &field, &rules);
        let bea_time = meet.competitor(bea).unwrap().finish_time;
        assert!((bea_time - (20.0 + rules.epsilon)).abs() < 1e-9);
    }

    #[test]
    fn test_move_down_splits_target_and_next() {
        let mut meet = sample_meet();
        let rules = ScoringRules::default();
        let field = meet.field_order();
        let ana = meet.find_by_name("Ana").unwrap();

        // Ana 16.0 -> rank 3: midpoint of times at slots 3 and 4 (18.0, 19.0).
        retime_to_rank(&mut meet, ana, 3, &field, &rules);
        let ana_time = meet.competitor(ana).unwrap().finish_time;
        assert!((ana_time - 18.5).abs() < 1e-9);

        recompute(&mut meet, &rules);
        assert_eq!(meet.competitor(ana).unwrap().effective_rank, Some(3));
    }

    #[test]
    fn test_move_up_splits_previous_and_target() {
        let mut meet = sample_meet();
        let rules = ScoringRules::default();
        let field = meet.field_order();
        let dee = meet.find_by_name("Dee").unwrap();

        // Dee 19.0 -> rank 2: midpoint of times at slots 1 and 2 (16.0, 17.0).
        retime_to_rank(&mut meet, dee, 2, &field, &rules);
        let dee_time = meet.competitor(dee).unwrap().finish_time;
        assert!((dee_time - 16.5).abs() < 1e-9);

        recompute(&mut meet, &rules);
        assert_eq!(meet.competitor(dee).unwrap().effective_rank, Some(2));
    }

    #[test]
    fn test_out_of_range_rank_is_a_noop() {
        let mut meet = sample_meet();
        let rules = ScoringRules::default();
        let field = meet.field_order();
        let ana = meet.find_by_name("Ana").unwrap();

        retime_to_rank(&mut meet, ana, 0, &field, &rules);
        retime_to_rank(&mut meet, ana, 6, &field, &rules);
        assert_eq!(meet.competitor(ana).unwrap().finish_time, 16.0);
    }

    #[test]
    fn test_id_missing_from_field_is_a_noop() {
        let mut meet = sample_meet();
        let rules = ScoringRules::default();
        let field = meet.field_order();
        let late = meet.add_competitor("Late", "North", 25.0, None);

        retime_to_rank(&mut meet, late, 2, &field, &rules);
        assert_eq!(meet.competitor(late).unwrap().finish_time, 25.0);
    }
}
