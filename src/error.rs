use std::fmt;

/// Errors raised while analyzing an IGC flight log
#[derive(Debug)]
pub enum AnalysisError {
    /// I/O errors
    Io(std::io::Error),
    /// No HFDTE record, so fix times cannot be anchored to a date
    MissingDate,
    /// Parse errors with context
    Parse(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Io(err) => write!(f, "I/O error: {}", err),
            AnalysisError::MissingDate => write!(f, "No date record (HFDTE) found in file"),
            AnalysisError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
