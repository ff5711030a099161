//! Minimal CSV reading and writing for the roster and door-list files.
//!
//! Fields containing a comma, quote or line break are wrapped in double
//! quotes with inner quotes doubled. The reader accepts the same, including
//! quoted line breaks.

use std::fs;
use std::path::Path;

use crate::error::ProjectNightResult;

/// A parsed record and the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Read a CSV file, drop the header row and any blank lines.
pub fn read_records(path: &Path) -> ProjectNightResult<Vec<CsvRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_records(&content).into_iter().skip(1).collect())
}

/// Write a header and rows, replacing any existing file.
pub fn write_records(path: &Path, header: &[&str], rows: &[Vec<String>]) -> ProjectNightResult<()> {
    let mut out = String::new();
    out.push_str(&format_row(header.iter().copied()));
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str)));
    }
    fs::write(path, out)?;
    Ok(())
}

pub fn parse_records(content: &str) -> Vec<CsvRecord> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, record_line, std::mem::take(&mut fields));
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut records, record_line, fields);
    }

    records
}

fn push_record(records: &mut Vec<CsvRecord>, line: usize, fields: Vec<String>) {
    let blank = fields.iter().all(|f| f.trim().is_empty());
    if !blank {
        records.push(CsvRecord { line, fields });
    }
}

pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn format_row<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    let mut row = fields.map(escape_field).collect::<Vec<_>>().join(",");
    row.push('\n');
    row
}
