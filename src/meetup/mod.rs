//! Access to the event platform's REST API for RSVP lists.

pub mod config;
pub mod api;
pub mod client;
pub mod attendees;

pub use api::{EventApi, RawEvent, RawMember, RawRsvp};
pub use client::MeetupClient;
pub use config::MeetupConfig;
