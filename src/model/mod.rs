pub mod ids;
pub mod participant;
pub mod attendee;
pub mod event;

// Re-exports for convenience
pub use ids::{EventId, MemberId};
pub use participant::{Group, Participant};
pub use attendee::{AttendeeRecord, RsvpStatus, SecurityListEntry};
pub use event::EventSummary;
