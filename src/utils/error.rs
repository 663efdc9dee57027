use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to access {path}: {source}")]
    FileAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {message}")]
    CatalogParseError { path: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid filename pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnnotateError {
    pub fn file_access(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileAccessError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::FileAccessError { .. } => ErrorCategory::FileSystem,
            Self::CatalogParseError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::PatternError(_) => ErrorCategory::Configuration,
            Self::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
            ErrorCategory::Internal => ErrorSeverity::Medium,
        }
    }

    /// Process exit code for a run aborted by this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("File system error: {}", e),
            Self::FileAccessError { path, source } => {
                format!("Could not read or write '{}': {}", path, source)
            }
            Self::CatalogParseError { path, .. } => {
                format!("The catalog file '{}' is not valid TOML", path)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            Self::PatternError(_) => "Service keys could not be turned into a filename pattern".to_string(),
            Self::SerializationError(e) => format!("Could not serialize the run summary: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) | Self::FileAccessError { .. } => {
                "Check file permissions and free disk space, or rerun with --continue-on-error"
            }
            Self::CatalogParseError { .. } => "Fix the TOML syntax in the catalog file",
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Review the catalog file against the documented format"
            }
            Self::PatternError(_) => "Use only lowercase letters, digits and '-' in service keys",
            Self::SerializationError(_) => "Rerun without --json",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnnotateError>;
