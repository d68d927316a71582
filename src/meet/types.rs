use std::collections::BTreeMap;

/// Identity of a competitor within one meet. Ids are handed out in insertion
/// order and never reused, which also makes them the deterministic tie-break
/// when two competitors share a finish time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompetitorId(pub u64);

#[derive(Debug, Clone)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    /// Name of the owning team. Kept in sync with `Team::members` by the
    /// roster operations; never edit directly.
    pub team: String,
    /// Place held in the source race. Display/audit only, never scored.
    pub original_place: Option<u32>,
    /// Elapsed time in minutes. Non-finite values sort as slowest.
    pub finish_time: f64,
    // Derived fields below. Only valid after recompute().
    pub eligible: bool,
    pub effective_rank: Option<u32>,
    pub points: Option<u32>,
}

impl Competitor {
    /// Sort key for ranking. Missing or NaN times sort after every valid time
    /// so they never win a rank; +inf is the documented sentinel.
    pub fn sort_key(&self) -> f64 {
        if self.finish_time.is_finite() {
            self.finish_time
        } else {
            f64::INFINITY
        }
    }
}

#[derive(Debug, Clone)]
pub struct Team {
    pub name: String,
    pub members: Vec<CompetitorId>,
    // Derived. Only valid after recompute().
    pub score_components: Vec<u32>,
    pub score: Option<u32>,
}

impl Team {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
            score_components: Vec::new(),
            score: None,
        }
    }
}

/// A virtual meet: an arena of competitors plus an owning-side index from team
/// name to member ids. Teams exist exactly as long as they have members, so
/// competitor/team referential integrity is structural rather than by
/// convention.
#[derive(Debug, Clone, Default)]
pub struct Meet {
    pub(crate) competitors: Vec<Competitor>,
    pub(crate) teams: BTreeMap<String, Team>,
    /// Team names in scoring order, produced by recompute() stage 5.
    pub(crate) team_order: Vec<String>,
    next_id: u64,
}

impl Meet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc_id(&mut self) -> CompetitorId {
        let id = CompetitorId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn competitor(&self, id: CompetitorId) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.id == id)
    }

    pub(crate) fn competitor_mut(&mut self, id: CompetitorId) -> Option<&mut Competitor> {
        self.competitors.iter_mut().find(|c| c.id == id)
    }

    /// All competitors in insertion order.
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    /// Team names in scoring order (valid after recompute()).
    pub fn team_order(&self) -> &[String] {
        &self.team_order
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    /// First competitor with the given name, in insertion order. Names are not
    /// unique; callers addressing competitors by name get the earliest match.
    pub fn find_by_name(&self, name: &str) -> Option<CompetitorId> {
        self.competitors
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
    }

    /// The full roster ordered ascending by finish time, ties broken by
    /// insertion order. This is the field the re-rank solver operates on.
    pub fn field_order(&self) -> Vec<CompetitorId> {
        let mut ids: Vec<&Competitor> = self.competitors.iter().collect();
        ids.sort_by(|a, b| {
            a.sort_key()
                .partial_cmp(&b.sort_key())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        ids.into_iter().map(|c| c.id).collect()
    }
}
