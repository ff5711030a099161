use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectNightError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("No valid names to remove: {}.", .names.join(", "))]
    NotFound { names: Vec<String> },

    #[error("{input} is an invalid command. Please choose from: {valid}.")]
    UnknownCommand { input: String, valid: String },

    #[error("Failed with status: {status}. URL:\n{url}")]
    ExternalService { status: u16, url: String },

    #[error("Could not reach {url}: {message}")]
    Transport { url: String, message: String },

    #[error("{path}, line {line}: {reason}")]
    MalformedCsv {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ProjectNightResult<T> = Result<T, ProjectNightError>;
