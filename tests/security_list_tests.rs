use std::cell::RefCell;
use std::collections::HashMap;

use project_night::error::{ProjectNightError, ProjectNightResult};
use project_night::meetup::attendees::{self, format_timestamp};
use project_night::meetup::{EventApi, RawEvent, RawMember, RawRsvp};
use project_night::model::{AttendeeRecord, EventId, MemberId, RsvpStatus};
use project_night::ops::security_list_ops::security_list;

fn record(id: u64, account: &str, given: &str, status: &str) -> AttendeeRecord {
    AttendeeRecord {
        member_id: MemberId(id),
        account_name: account.into(),
        given_name: given.into(),
        rsvp_status: RsvpStatus::parse(status),
        updated_at: format!("2018-03-0{} 12:00:00", id % 10),
    }
}

fn listed_names(records: &[AttendeeRecord]) -> Vec<String> {
    security_list(records).into_iter().map(|e| e.canonical_name).collect()
}

// ==========================================================================
// NORMALIZER TESTS
// ==========================================================================

#[test]
fn single_word_account_name_is_dropped() {
    let records = vec![record(1, "Jo", "", "yes")];
    assert!(security_list(&records).is_empty());
}

#[test]
fn declined_rsvps_are_always_excluded() {
    let records = vec![
        record(1, "Ada Lovelace", "Ada Lovelace", "no"),
        record(2, "Grace Hopper", "", "yes"),
    ];
    assert_eq!(listed_names(&records), vec!["Grace Hopper"]);
}

#[test]
fn status_match_is_exact() {
    let records = vec![
        record(1, "Ada Lovelace", "", "No"),
        record(2, "Grace Hopper", "", "waitlist"),
        record(3, "Alan Turing", "", "maybe"),
    ];
    assert_eq!(listed_names(&records).len(), 3);
}

#[test]
fn given_name_wins_over_account_name() {
    let records = vec![
        record(1, "adal", "Ada Lovelace", "yes"),
        record(2, "Grace Hopper", "   ", "yes"),
    ];
    assert_eq!(listed_names(&records), vec!["Ada Lovelace", "Grace Hopper"]);
}

#[test]
fn single_word_given_name_is_not_rescued_by_account_name() {
    let records = vec![record(1, "Ada Lovelace", "Ada", "yes")];
    assert!(security_list(&records).is_empty());
}

#[test]
fn names_sort_naturally_ignoring_case() {
    let records = vec![
        record(1, "Bob Smith", "", "yes"),
        record(2, "alice Jones", "", "yes"),
        record(3, "Bob 10", "", "yes"),
        record(4, "Bob 2", "", "yes"),
    ];
    assert_eq!(
        listed_names(&records),
        vec!["alice Jones", "Bob 2", "Bob 10", "Bob Smith"]
    );
}

#[test]
fn accented_names_sort_among_their_base_letters() {
    let records = vec![
        record(1, "Émile Zola", "", "yes"),
        record(2, "Frank Li", "", "yes"),
        record(3, "Zoe Adams", "", "yes"),
        record(4, "José Núñez", "", "yes"),
        record(5, "Josh Park", "", "yes"),
    ];
    assert_eq!(
        listed_names(&records),
        vec!["Émile Zola", "Frank Li", "José Núñez", "Josh Park", "Zoe Adams"]
    );
}

#[test]
fn rows_keep_their_own_member_id_and_timestamp() {
    let records = vec![
        record(7, "Zed Zulu", "", "yes"),
        record(3, "Amy Adams", "", "yes"),
    ];
    let entries = security_list(&records);
    assert_eq!(entries[0].member_id, MemberId(3));
    assert_eq!(entries[0].updated_at, "2018-03-03 12:00:00");
    assert_eq!(entries[1].member_id, MemberId(7));
}

#[test]
fn duplicate_member_ids_pass_through() {
    let records = vec![
        record(5, "Ada Lovelace", "", "yes"),
        record(5, "Ada Lovelace", "", "maybe"),
    ];
    assert_eq!(security_list(&records).len(), 2);
}

// ==========================================================================
// FETCH TESTS
// ==========================================================================

struct FakeApi {
    rsvps: ProjectNightResult<Vec<RawRsvp>>,
    given_names: HashMap<u64, String>,
    lookups: RefCell<Vec<MemberId>>,
}

impl FakeApi {
    fn new(rsvps: Vec<RawRsvp>) -> Self {
        Self {
            rsvps: Ok(rsvps),
            given_names: HashMap::new(),
            lookups: RefCell::new(Vec::new()),
        }
    }
}

impl EventApi for FakeApi {
    fn upcoming_events(&self) -> ProjectNightResult<Vec<RawEvent>> {
        Ok(vec![RawEvent {
            id: EventId::new("249"),
            name: "Project Night".into(),
            time: 1_520_000_000_000,
            link: "https://example.com/249".into(),
        }])
    }

    fn rsvps(&self, _event_id: &EventId) -> ProjectNightResult<Vec<RawRsvp>> {
        match &self.rsvps {
            Ok(rsvps) => Ok(rsvps.clone()),
            Err(_) => Err(ProjectNightError::ExternalService {
                status: 401,
                url: "https://api.example.com/rsvps".into(),
            }),
        }
    }

    fn given_name(&self, member_id: MemberId) -> ProjectNightResult<String> {
        self.lookups.borrow_mut().push(member_id);
        Ok(self.given_names.get(&member_id.0).cloned().unwrap_or_default())
    }
}

fn raw(id: u64, name: &str, response: &str, updated: i64) -> RawRsvp {
    RawRsvp {
        member: RawMember {
            id: MemberId(id),
            name: name.into(),
        },
        response: response.into(),
        updated,
    }
}

#[test]
fn fetch_resolves_given_names_once_per_member() {
    let mut api = FakeApi::new(vec![
        raw(1, "adal", "yes", 1_520_000_000_000),
        raw(2, "Grace Hopper", "no", 1_520_000_100_000),
        raw(1, "adal", "maybe", 1_520_000_200_000),
    ]);
    api.given_names.insert(1, "Ada Lovelace".into());

    let records = attendees::fetch_attendees(&api, &EventId::new("249")).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].given_name, "Ada Lovelace");
    assert_eq!(records[1].given_name, "");
    assert_eq!(records[1].rsvp_status, RsvpStatus::No);
    assert_eq!(records[2].updated_at, format_timestamp(1_520_000_200_000));
    assert_eq!(*api.lookups.borrow(), vec![MemberId(1), MemberId(2)]);
}

#[test]
fn failed_rsvp_fetch_is_an_error() {
    let mut api = FakeApi::new(Vec::new());
    api.rsvps = Err(ProjectNightError::Config("unused".into()));

    let result = attendees::fetch_attendees(&api, &EventId::new("249"));
    assert!(matches!(
        result,
        Err(ProjectNightError::ExternalService { status: 401, .. })
    ));
}

#[test]
fn upcoming_events_render_local_time() {
    let api = FakeApi::new(Vec::new());
    let events = attendees::upcoming_events(&api).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].time, format_timestamp(1_520_000_000_000));
    assert_eq!(events[0].time.len(), "2018-03-02 14:13:20".len());
}

#[test]
fn fetched_records_flow_into_security_list() {
    let mut api = FakeApi::new(vec![
        raw(1, "zed", "yes", 0),
        raw(2, "Bea Arthur", "yes", 0),
        raw(3, "Cy Twombly", "no", 0),
    ]);
    api.given_names.insert(1, "Zed Alpha".into());

    let records = attendees::fetch_attendees(&api, &EventId::new("249")).unwrap();
    let names: Vec<String> = security_list(&records)
        .into_iter()
        .map(|e| e.canonical_name)
        .collect();
    assert_eq!(names, vec!["Bea Arthur", "Zed Alpha"]);
}

#[test]
fn raw_rsvp_deserializes_from_api_json() {
    let body = serde_json::json!([{
        "created": 1519000000000i64,
        "updated": 1520000000000i64,
        "response": "yes",
        "guests": 0,
        "member": { "id": 184, "name": "Ada Lovelace", "role": "organizer" },
        "event": { "id": "249", "name": "Project Night" }
    }]);
    let rsvps: Vec<RawRsvp> = serde_json::from_value(body).unwrap();
    assert_eq!(rsvps[0].member.id, MemberId(184));
    assert_eq!(rsvps[0].response, "yes");
}

#[test]
fn raw_event_accepts_legacy_url_field() {
    let body = serde_json::json!({
        "id": "qhqnvlyxcbjb",
        "name": "Project Night",
        "time": 1520000000000i64,
        "event_url": "https://example.com/e"
    });
    let event: RawEvent = serde_json::from_value(body).unwrap();
    assert_eq!(event.link, "https://example.com/e");
}
