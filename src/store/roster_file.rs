use std::path::Path;

use tracing::{debug, info};

use super::csv_file::{self, CsvRecord};
use crate::error::{ProjectNightError, ProjectNightResult};
use crate::model::Participant;

pub const ROSTER_HEADER: [&str; 2] = ["Name", "Experience Score"];

/// Column layout of a roster CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterLayout {
    /// `Name,Experience Score`
    Plain,
    /// `Timestamp,Name,Experience Score`, as exported from a sign-up form.
    GoogleForm,
}

impl RosterLayout {
    fn name_column(self) -> usize {
        match self {
            RosterLayout::Plain => 0,
            RosterLayout::GoogleForm => 1,
        }
    }
}

/// Load every participant row of a roster CSV. The header row is skipped.
/// Any malformed row fails the whole load.
pub fn load(path: &Path, layout: RosterLayout) -> ProjectNightResult<Vec<Participant>> {
    let records = csv_file::read_records(path)?;
    let participants = records
        .iter()
        .map(|record| parse_row(path, layout, record))
        .collect::<ProjectNightResult<Vec<_>>>()?;
    info!(path = %path.display(), count = participants.len(), "loaded roster rows");
    Ok(participants)
}

fn parse_row(
    path: &Path,
    layout: RosterLayout,
    record: &CsvRecord,
) -> ProjectNightResult<Participant> {
    let malformed = |reason: String| ProjectNightError::MalformedCsv {
        path: path.display().to_string(),
        line: record.line,
        reason,
    };

    let column = layout.name_column();
    let (name, score) = match (record.fields.get(column), record.fields.get(column + 1)) {
        (Some(name), Some(score)) => (name.trim(), score.trim()),
        _ => return Err(malformed(format!("expected {} columns", column + 2))),
    };

    if name.is_empty() {
        return Err(malformed("name is blank".into()));
    }
    let experience_score = score
        .parse::<i64>()
        .map_err(|_| malformed(format!("experience score '{}' is not an integer", score)))?;

    Ok(Participant::new(name, experience_score))
}

/// Write the roster with a `Name,Experience Score` header.
pub fn save(path: &Path, participants: &[Participant]) -> ProjectNightResult<()> {
    let rows: Vec<Vec<String>> = participants
        .iter()
        .map(|p| vec![p.name.clone(), p.experience_score.to_string()])
        .collect();
    csv_file::write_records(path, &ROSTER_HEADER, &rows)?;
    debug!(path = %path.display(), count = rows.len(), "saved roster");
    Ok(())
}
