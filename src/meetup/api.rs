use serde::Deserialize;

use crate::error::ProjectNightResult;
use crate::model::{EventId, MemberId};

/// An event as returned by the events endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: EventId,
    pub name: String,
    /// Start time, epoch milliseconds.
    pub time: i64,
    #[serde(default, alias = "event_url")]
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
}

/// An RSVP as returned by the RSVP endpoint. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRsvp {
    pub member: RawMember,
    pub response: String,
    /// Last change, epoch milliseconds.
    #[serde(default)]
    pub updated: i64,
}

/// The calls the door-list flow makes against the event platform.
pub trait EventApi {
    fn upcoming_events(&self) -> ProjectNightResult<Vec<RawEvent>>;

    /// Every RSVP for an event. A non-success status is an error.
    fn rsvps(&self, event_id: &EventId) -> ProjectNightResult<Vec<RawRsvp>>;

    /// The member's answer to the group profile question, or an empty string
    /// when the profile has no usable answer.
    fn given_name(&self, member_id: MemberId) -> ProjectNightResult<String>;
}
