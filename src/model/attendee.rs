use super::ids::MemberId;

/// An RSVP response. Only `No` excludes someone from the door list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
    Waitlist,
    Other(String),
}

impl RsvpStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "yes" => Self::Yes,
            "no" => Self::No,
            "maybe" => Self::Maybe,
            "waitlist" => Self::Waitlist,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Self::No)
    }
}

/// One RSVP after the member's given name has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRecord {
    pub member_id: MemberId,
    pub account_name: String,
    /// Answer to the group's "what is your name" profile question; may be empty.
    pub given_name: String,
    pub rsvp_status: RsvpStatus,
    /// Already rendered for display.
    pub updated_at: String,
}

/// A row of the door list handed to building security.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityListEntry {
    pub member_id: MemberId,
    pub canonical_name: String,
    pub updated_at: String,
}
