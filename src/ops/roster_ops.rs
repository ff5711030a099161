use std::path::PathBuf;

use tracing::info;

use crate::error::{ProjectNightError, ProjectNightResult};
use crate::model::Participant;
use crate::store::{roster_file, RemoveOutcome, RosterLayout, RosterStore};
use crate::validation;

const ADD_USAGE: &str = "Invalid addition. Please enter a name, integer only.";

/// Parse `<name>, <score>`. Anything after a second comma is ignored.
pub fn parse_add(args: &str) -> ProjectNightResult<Participant> {
    let mut parts = args.split(',');
    let name = parts.next().unwrap_or_default();
    let score = parts
        .next()
        .ok_or_else(|| ProjectNightError::InvalidArgument(ADD_USAGE.into()))?;

    let name = validation::non_blank(name, "name")
        .map_err(|_| ProjectNightError::InvalidArgument(ADD_USAGE.into()))?;
    let score = validation::score(score)
        .map_err(|_| ProjectNightError::InvalidArgument(ADD_USAGE.into()))?;

    Ok(Participant::new(name, score))
}

pub fn add_participant(store: &mut RosterStore, args: &str) -> ProjectNightResult<Participant> {
    let participant = parse_add(args)?;
    store.add(participant.clone());
    Ok(participant)
}

/// Load a roster CSV and upsert every row. Returns the number of rows read.
pub fn bulk_add(
    store: &mut RosterStore,
    args: &str,
    layout: RosterLayout,
) -> ProjectNightResult<usize> {
    let path = path_argument(args)?;
    let rows = roster_file::load(&path, layout)?;
    let count = rows.len();
    store.bulk_add(rows);
    Ok(count)
}

/// Split a comma separated list of names, dropping blanks.
pub fn parse_names(args: &str) -> Vec<String> {
    args.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Remove the listed names. Fails with `NotFound` when none of them were on
/// the roster, in which case nothing changes.
pub fn remove_participants(
    store: &mut RosterStore,
    args: &str,
) -> ProjectNightResult<RemoveOutcome> {
    let names = parse_names(args);
    let outcome = store.remove(&names);
    if outcome.removed.is_empty() {
        return Err(ProjectNightError::NotFound {
            names: outcome.not_found,
        });
    }
    info!(removed = outcome.removed.len(), "removed participants");
    Ok(outcome)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearDecision {
    Cleared,
    Kept,
    Invalid(String),
}

/// Apply the answer to "remove all participants?".
pub fn clear_participants(store: &mut RosterStore, answer: &str) -> ClearDecision {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => {
            store.clear();
            ClearDecision::Cleared
        }
        "n" | "no" => ClearDecision::Kept,
        _ => ClearDecision::Invalid(answer.trim().to_string()),
    }
}

pub fn save_participants(store: &RosterStore, args: &str) -> ProjectNightResult<PathBuf> {
    let path = path_argument(args)?;
    roster_file::save(&path, store.list())?;
    Ok(path)
}

fn path_argument(args: &str) -> ProjectNightResult<PathBuf> {
    validation::non_blank(args, "path")
        .map(PathBuf::from)
        .map_err(|_| ProjectNightError::InvalidArgument("Please enter a valid path name.".into()))
}
