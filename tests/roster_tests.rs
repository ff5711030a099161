use project_night::error::ProjectNightError;
use project_night::model::Participant;
use project_night::ops::roster_ops::{self, ClearDecision};
use project_night::store::RosterStore;

fn roster(entries: &[(&str, i64)]) -> RosterStore {
    let mut store = RosterStore::new();
    for (name, score) in entries {
        store.add(Participant::new(*name, *score));
    }
    store
}

fn names(store: &RosterStore) -> Vec<&str> {
    store.list().iter().map(|p| p.name.as_str()).collect()
}

// ==========================================================================
// STORE TESTS
// ==========================================================================

#[test]
fn re_adding_a_name_overwrites_its_score() {
    let mut store = RosterStore::new();
    roster_ops::add_participant(&mut store, "Alice, 3").unwrap();
    roster_ops::add_participant(&mut store, "Alice, 9").unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("Alice").unwrap().experience_score, 9);
}

#[test]
fn re_added_name_moves_to_the_end() {
    let mut store = roster(&[("A", 1), ("B", 2), ("C", 3)]);
    store.add(Participant::new("A", 4));
    assert_eq!(names(&store), vec!["B", "C", "A"]);
}

#[test]
fn names_are_case_sensitive() {
    let store = roster(&[("alice", 1), ("Alice", 2)]);
    assert_eq!(store.len(), 2);
}

#[test]
fn bulk_add_lets_incoming_rows_win() {
    let mut store = roster(&[("A", 1), ("B", 2)]);
    store.bulk_add(vec![
        Participant::new("B", 7),
        Participant::new("C", 3),
        Participant::new("C", 5),
    ]);

    assert_eq!(names(&store), vec!["A", "B", "C"]);
    assert_eq!(store.get("B").unwrap().experience_score, 7);
    assert_eq!(store.get("C").unwrap().experience_score, 5);
}

#[test]
fn clear_empties_the_roster() {
    let mut store = roster(&[("A", 1), ("B", 2)]);
    store.clear();
    assert!(store.is_empty());
}

// ==========================================================================
// ADD TESTS
// ==========================================================================

#[test]
fn add_trims_name_and_score() {
    let p = roster_ops::parse_add("  Grace Hopper ,  8 ").unwrap();
    assert_eq!(p, Participant::new("Grace Hopper", 8));
}

#[test]
fn add_without_score_is_invalid() {
    let mut store = RosterStore::new();
    let result = roster_ops::add_participant(&mut store, "Grace");
    assert!(matches!(result, Err(ProjectNightError::InvalidArgument(_))));
    assert!(store.is_empty());
}

#[test]
fn add_with_non_integer_score_is_invalid() {
    assert!(roster_ops::parse_add("Grace, lots").is_err());
    assert!(roster_ops::parse_add("Grace, 2.5").is_err());
}

#[test]
fn add_with_blank_name_is_invalid() {
    assert!(roster_ops::parse_add(" , 4").is_err());
}

#[test]
fn add_ignores_extra_columns() {
    let p = roster_ops::parse_add("Ada, 5, extra").unwrap();
    assert_eq!(p.experience_score, 5);
}

// ==========================================================================
// REMOVE TESTS
// ==========================================================================

#[test]
fn removing_unknown_names_reports_not_found_and_changes_nothing() {
    let mut store = roster(&[("A", 1), ("B", 2)]);
    let result = roster_ops::remove_participants(&mut store, "X, Y");

    match result {
        Err(ProjectNightError::NotFound { names }) => assert_eq!(names, vec!["X", "Y"]),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(names(&store), vec!["A", "B"]);
}

#[test]
fn not_found_message_names_what_was_asked_for() {
    let mut store = roster(&[("A", 1)]);
    let err = roster_ops::remove_participants(&mut store, "Zed, Yul").unwrap_err();
    assert_eq!(err.to_string(), "No valid names to remove: Zed, Yul.");
}

#[test]
fn removing_a_mix_removes_only_valid_names() {
    let mut store = roster(&[("A", 1), ("B", 2), ("C", 3)]);
    let outcome = roster_ops::remove_participants(&mut store, "C, Z, A").unwrap();

    assert_eq!(outcome.removed, vec!["C", "A"]);
    assert_eq!(outcome.not_found, vec!["Z"]);
    assert_eq!(names(&store), vec!["B"]);
}

#[test]
fn removing_the_same_name_twice_reports_it_once() {
    let mut store = roster(&[("A", 1)]);
    let outcome = roster_ops::remove_participants(&mut store, "A, A").unwrap();
    assert_eq!(outcome.removed, vec!["A"]);
    assert!(outcome.not_found.is_empty());
}

// ==========================================================================
// CLEAR TESTS
// ==========================================================================

#[test]
fn clear_requires_yes() {
    let mut store = roster(&[("A", 1)]);
    assert_eq!(roster_ops::clear_participants(&mut store, "nope"), ClearDecision::Invalid("nope".into()));
    assert_eq!(store.len(), 1);

    assert_eq!(roster_ops::clear_participants(&mut store, "N"), ClearDecision::Kept);
    assert_eq!(store.len(), 1);

    assert_eq!(roster_ops::clear_participants(&mut store, " Yes "), ClearDecision::Cleared);
    assert!(store.is_empty());
}

#[test]
fn clear_accepts_short_answer() {
    let mut store = roster(&[("A", 1)]);
    assert_eq!(roster_ops::clear_participants(&mut store, "y"), ClearDecision::Cleared);
    assert!(store.is_empty());
}
