use super::ids::EventId;

/// An upcoming event as shown in the selection table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub id: EventId,
    pub name: String,
    /// Local start time, `%Y-%m-%d %H:%M:%S`.
    pub time: String,
    pub link: String,
}
