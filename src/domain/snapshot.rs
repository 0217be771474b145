use crate::domain::{Event, Member};

/// In-memory mirror of the three collections. Loaded from the store at
/// startup and kept current by the services after each successful write;
/// all dashboard aggregation and search runs against a snapshot rather
/// than the store itself.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub tournaments: Vec<Event>,
    pub leagues: Vec<Event>,
}

impl Snapshot {
    /// Tournaments and leagues as one sequence, tournaments first.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.tournaments.iter().chain(self.leagues.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.tournaments.is_empty() && self.leagues.is_empty()
    }
}
