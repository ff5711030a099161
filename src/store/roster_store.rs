use crate::model::Participant;

/// In-memory roster keyed by participant name.
///
/// Entries are kept in the order they were last written: re-adding a name
/// drops the old entry and appends the new one. Grouping relies on this
/// order to break ties between equal scores.
#[derive(Debug, Default, Clone)]
pub struct RosterStore {
    participants: Vec<Participant>,
}

/// Result of a `remove` call, split by whether the name was on the roster.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub removed: Vec<String>,
    pub not_found: Vec<String>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a single participant. Last write wins.
    pub fn add(&mut self, participant: Participant) {
        self.participants.retain(|p| p.name != participant.name);
        self.participants.push(participant);
    }

    /// Upsert a batch. Existing entries sharing a name with the batch are
    /// dropped and the batch is appended in its own order.
    pub fn bulk_add(&mut self, rows: Vec<Participant>) {
        for row in rows {
            self.add(row);
        }
    }

    /// Remove every listed name that is present. Names are matched exactly.
    pub fn remove(&mut self, names: &[String]) -> RemoveOutcome {
        let mut outcome = RemoveOutcome::default();
        for name in names {
            if outcome.removed.contains(name) || outcome.not_found.contains(name) {
                continue;
            }
            if self.contains(name) {
                outcome.removed.push(name.clone());
            } else {
                outcome.not_found.push(name.clone());
            }
        }
        self.participants.retain(|p| !outcome.removed.contains(&p.name));
        outcome
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }

    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
