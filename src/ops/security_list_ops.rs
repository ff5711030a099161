use tracing::debug;

use crate::model::{AttendeeRecord, SecurityListEntry};
use crate::natural_sort::natural_cmp;

/// Build the door list from fetched RSVPs.
///
/// Declined RSVPs are dropped. Each remaining person is listed under their
/// given name, or their account name when no given name was supplied, and
/// only if that name has at least two words. The list is in natural order
/// by name. Repeated member ids are passed through unchanged.
pub fn security_list(records: &[AttendeeRecord]) -> Vec<SecurityListEntry> {
    let mut entries: Vec<SecurityListEntry> = records
        .iter()
        .filter(|r| !r.rsvp_status.is_declined())
        .map(|r| SecurityListEntry {
            member_id: r.member_id,
            canonical_name: canonical_name(&r.given_name, &r.account_name).to_string(),
            updated_at: r.updated_at.clone(),
        })
        .filter(|e| has_first_and_last_name(&e.canonical_name))
        .collect();

    entries.sort_by(|a, b| natural_cmp(&a.canonical_name, &b.canonical_name));
    debug!(
        rsvps = records.len(),
        listed = entries.len(),
        "built security list"
    );
    entries
}

/// The given name wins unless it is blank.
pub fn canonical_name<'a>(given_name: &'a str, account_name: &'a str) -> &'a str {
    if given_name.trim().is_empty() {
        account_name
    } else {
        given_name
    }
}

/// Runs of letters, digits or underscores.
pub fn name_tokens(name: &str) -> Vec<&str> {
    name.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn has_first_and_last_name(name: &str) -> bool {
    name_tokens(name).len() >= 2
}
