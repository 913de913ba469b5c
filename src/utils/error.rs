use thiserror::Error;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl QaError {
    /// Short message suitable for stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            QaError::IoError(e) => format!("Could not read or write a file: {}", e),
            QaError::SerializationError(_) => "Could not produce JSON output".to_string(),
            QaError::CsvError(_) => "Could not produce CSV/TSV output".to_string(),
            QaError::ConfigValidationError { field, .. } => {
                format!("The configuration is invalid ({})", field)
            }
            QaError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QaError::IoError(_) => "Check that the path exists and is readable",
            QaError::SerializationError(_) | QaError::CsvError(_) => {
                "Try the plain text output format instead"
            }
            QaError::ConfigValidationError { .. } => {
                "Make sure the config file is valid TOML with the expected sections"
            }
            QaError::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or override it on the command line"
            }
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            QaError::IoError(_) => 3,
            QaError::SerializationError(_) | QaError::CsvError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, QaError>;
