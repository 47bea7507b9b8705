use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Inventory source error: {message}")]
    SourceError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Lot {id} not found in inventory")]
    LotNotFound { id: u64 },

    #[error("Lot {id} ({identifier}) is not available for sale")]
    LotUnavailable { id: u64, identifier: String },

    #[error("Unsupported installment term: {months} months")]
    UnsupportedTerm { months: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LotError::ApiError(_) | LotError::SourceError { .. } => ErrorCategory::Network,
            LotError::CsvError(_)
            | LotError::SerializationError(_)
            | LotError::ValidationError { .. } => ErrorCategory::Data,
            LotError::ConfigError { .. } | LotError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            LotError::LotNotFound { .. }
            | LotError::LotUnavailable { .. }
            | LotError::UnsupportedTerm { .. } => ErrorCategory::Input,
            LotError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LotError::ApiError(_) | LotError::SourceError { .. } => {
                "Check your connection and the inventory endpoint, then try again"
            }
            LotError::SerializationError(_) | LotError::ValidationError { .. } => {
                "Make sure the inventory is a JSON array of {id, lote, area, status} records"
            }
            LotError::CsvError(_) | LotError::IoError(_) => {
                "Check that the path exists and is writable"
            }
            LotError::ConfigError { .. } | LotError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and the TOML config file"
            }
            LotError::LotNotFound { .. } => "Run `lot-pricing list` to see the valid lot ids",
            LotError::LotUnavailable { .. } => "Pick a lot listed with status Available",
            LotError::UnsupportedTerm { .. } => "Run `lot-pricing terms` to see the offered terms",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LotError::ApiError(_) | LotError::SourceError { .. } => {
                "Could not load the lot inventory from the remote service".to_string()
            }
            LotError::LotNotFound { id } => format!("There is no lot with id {}", id),
            LotError::LotUnavailable { identifier, .. } => {
                format!("{} has already been sold", identifier)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LotError>;
