use crate::error::{ProjectNightError, ProjectNightResult};

pub const DEFAULT_GROUP_SIZE: i64 = 4;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ProjectNightResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ProjectNightError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Parses an experience score. Surrounding whitespace is ignored.
pub fn score(value: &str) -> ProjectNightResult<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        ProjectNightError::InvalidArgument(format!(
            "Experience score expects an integer. You input '{}'.",
            value.trim()
        ))
    })
}

/// Parses the optional argument of `group`. Blank means the default size.
pub fn group_size(value: &str) -> ProjectNightResult<i64> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_GROUP_SIZE);
    }
    value.parse::<i64>().map_err(|_| {
        ProjectNightError::InvalidArgument(format!(
            "group_size expects an integer. You input the string {}.",
            value
        ))
    })
}
