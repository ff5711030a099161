use std::collections::HashMap;

use chrono::{Local, TimeZone};
use tracing::info;

use super::api::EventApi;
use crate::error::ProjectNightResult;
use crate::model::{AttendeeRecord, EventId, EventSummary, RsvpStatus};

pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render epoch milliseconds in local time.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format(DISPLAY_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn upcoming_events(api: &dyn EventApi) -> ProjectNightResult<Vec<EventSummary>> {
    let events = api
        .upcoming_events()?
        .into_iter()
        .map(|e| EventSummary {
            id: e.id,
            name: e.name,
            time: format_timestamp(e.time),
            link: e.link,
        })
        .collect();
    Ok(events)
}

/// Fetch an event's RSVPs and resolve each member's given name.
///
/// Given names are looked up once per distinct member, one request at a time.
pub fn fetch_attendees(
    api: &dyn EventApi,
    event_id: &EventId,
) -> ProjectNightResult<Vec<AttendeeRecord>> {
    let rsvps = api.rsvps(event_id)?;
    info!(%event_id, rsvps = rsvps.len(), "fetched RSVPs");

    let mut given_names = HashMap::new();
    let mut records = Vec::with_capacity(rsvps.len());
    for rsvp in rsvps {
        let member_id = rsvp.member.id;
        let given_name = match given_names.get(&member_id).cloned() {
            Some(name) => name,
            None => {
                let name = api.given_name(member_id)?;
                given_names.insert(member_id, name.clone());
                name
            }
        };

        records.push(AttendeeRecord {
            member_id,
            account_name: rsvp.member.name,
            given_name,
            rsvp_status: RsvpStatus::parse(&rsvp.response),
            updated_at: format_timestamp(rsvp.updated),
        });
    }
    Ok(records)
}
