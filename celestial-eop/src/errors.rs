use celestial_time::TimeError;
use thiserror::Error;

pub type EopResult<T> = Result<T, EopError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EopError {
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid EOP record: {0}")]
    InvalidRecord(String),

    #[error("No EOP data: {0}")]
    NoData(String),
}

impl EopError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn io(path: &std::path::Path, error: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord(message.into())
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self::NoData(message.into())
    }
}
