use std::path::{Path, PathBuf};

use tracing::info;

use super::csv_file;
use crate::error::ProjectNightResult;
use crate::model::{EventSummary, SecurityListEntry};

pub const SECURITY_LIST_HEADER: [&str; 3] = ["User ID", "Security Name", "RSVP Last Updated"];

/// File name for an event's door list: `<start time>_<event name>.csv`.
pub fn file_name_for(event: &EventSummary) -> PathBuf {
    let time = event.time.replace(':', "-");
    let name: String = event
        .name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '-' } else { c })
        .collect();
    PathBuf::from(format!("{}_{}.csv", time, name.trim()))
}

pub fn save(path: &Path, entries: &[SecurityListEntry]) -> ProjectNightResult<()> {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.member_id.to_string(),
                e.canonical_name.clone(),
                e.updated_at.clone(),
            ]
        })
        .collect();
    csv_file::write_records(path, &SECURITY_LIST_HEADER, &rows)?;
    info!(path = %path.display(), count = rows.len(), "wrote security list");
    Ok(())
}
