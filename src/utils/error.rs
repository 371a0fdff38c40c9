use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhoArtError {
    #[error("No Git identity found (user.name and user.email are both unset)")]
    ConfigurationMissing,

    #[error("GitHub API request failed: {status} {reason}")]
    LookupFailed { status: u16, reason: String },

    #[error("Avatar image unavailable: {reason}")]
    ImageUnavailable { reason: String },

    #[error("Avatar image could not be decoded: {0}")]
    ImageDecodeError(#[from] image::ImageError),

    #[error("Malformed input '{value}': {reason}")]
    MalformedInput { value: String, reason: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Identity,
    Network,
    Image,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WhoArtError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WhoArtError::ConfigurationMissing | WhoArtError::MalformedInput { .. } => {
                ErrorCategory::Identity
            }
            WhoArtError::LookupFailed { .. } | WhoArtError::ApiError(_) => ErrorCategory::Network,
            WhoArtError::ImageUnavailable { .. } | WhoArtError::ImageDecodeError(_) => {
                ErrorCategory::Image
            }
            WhoArtError::SerializationError(_) => ErrorCategory::Data,
            WhoArtError::ConfigError { .. } | WhoArtError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            WhoArtError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 頭像失敗時仍可顯示個人資料
            WhoArtError::ImageUnavailable { .. } | WhoArtError::ImageDecodeError(_) => {
                ErrorSeverity::Low
            }
            WhoArtError::LookupFailed { status, .. } if *status == 403 || *status == 429 => {
                ErrorSeverity::Medium
            }
            WhoArtError::ApiError(_) => ErrorSeverity::Medium,
            WhoArtError::ConfigurationMissing
            | WhoArtError::MalformedInput { .. }
            | WhoArtError::LookupFailed { .. }
            | WhoArtError::SerializationError(_)
            | WhoArtError::ConfigError { .. }
            | WhoArtError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            WhoArtError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WhoArtError::ConfigurationMissing => {
                "Run `git config --global user.name <github-login>` or pass --user"
            }
            WhoArtError::MalformedInput { .. } => {
                "Set user.name to your GitHub login or pass --user explicitly"
            }
            WhoArtError::LookupFailed { status: 404, .. } => {
                "Check that the Git identity matches an existing GitHub login"
            }
            WhoArtError::LookupFailed { status: 403, .. }
            | WhoArtError::LookupFailed { status: 429, .. } => {
                "GitHub rate limit reached; wait a while or set [api].token"
            }
            WhoArtError::LookupFailed { .. } | WhoArtError::ApiError(_) => {
                "Check your network connection and the API base URL"
            }
            WhoArtError::ImageUnavailable { .. } | WhoArtError::ImageDecodeError(_) => {
                "The avatar could not be shown; the profile is printed without it"
            }
            WhoArtError::SerializationError(_) => {
                "The API answered with unexpected JSON; check --api-base-url"
            }
            WhoArtError::ConfigError { .. } | WhoArtError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            WhoArtError::IoError(_) => "Check that the terminal output is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Identity => format!("Could not determine your GitHub login: {}", self),
            ErrorCategory::Network => format!("Could not reach GitHub: {}", self),
            ErrorCategory::Image => format!("Could not render the avatar: {}", self),
            ErrorCategory::Data => format!("Unexpected profile data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, WhoArtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failed_message_carries_status_text() {
        let err = WhoArtError::LookupFailed {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "GitHub API request failed: 404 Not Found");
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_rate_limit_is_retryable_severity() {
        let err = WhoArtError::LookupFailed {
            status: 403,
            reason: "Forbidden".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("rate limit"));
    }

    #[test]
    fn test_image_errors_are_low_severity() {
        let err = WhoArtError::ImageUnavailable {
            reason: "no avatar URL".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Image);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().starts_with("Could not render the avatar"));
    }
}
