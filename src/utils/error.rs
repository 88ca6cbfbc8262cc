use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Invalid request URL: {url}")]
    InvalidRequestUrl { url: String },

    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Empty response body from {endpoint}")]
    EmptyResponseBody { endpoint: String },

    // Deliberately carries no serde source: parser diagnostics stay out of
    // user-facing output.
    #[error("Response from {endpoint} did not match the expected shape")]
    DecodeError { endpoint: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, BrowseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 處理錯誤（解碼失敗、空回應）
    High,
    /// 網路層錯誤，重試通常有效
    Medium,
    /// 配置錯誤，需要使用者修正
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Decode,
    Config,
    Io,
}

impl BrowseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BrowseError::TransportError(_) => ErrorCategory::Network,
            BrowseError::EmptyResponseBody { .. } | BrowseError::DecodeError { .. } => {
                ErrorCategory::Decode
            }
            BrowseError::InvalidRequestUrl { .. }
            | BrowseError::ConfigError { .. }
            | BrowseError::InvalidConfigValueError { .. }
            | BrowseError::MissingConfigError { .. } => ErrorCategory::Config,
            BrowseError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Decode | ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Critical,
        }
    }

    /// One distinct message per error kind. The list flow shows these
    /// verbatim; the image flow collapses to a generic notice instead.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BrowseError::InvalidRequestUrl { url } => {
                format!("The request URL could not be constructed: {}", url)
            }
            BrowseError::TransportError(e) => {
                format!("The network request failed: {}", e)
            }
            BrowseError::EmptyResponseBody { endpoint } => {
                format!("The server returned no data for {}", endpoint)
            }
            BrowseError::DecodeError { endpoint } => {
                format!("The response from {} could not be understood", endpoint)
            }
            BrowseError::IoError(e) => format!("A local IO operation failed: {}", e),
            BrowseError::ConfigError { message } => format!("Configuration problem: {}", message),
            BrowseError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Configuration field {} has invalid value '{}': {}", field, value, reason),
            BrowseError::MissingConfigError { field } => {
                format!("Configuration field {} is required but missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and re-run the command",
            ErrorCategory::Decode => "The upstream API may have changed; re-run or report the issue",
            ErrorCategory::Config => "Fix the configuration value and try again",
            ErrorCategory::Io => "Check file permissions and paths, then try again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_has_distinct_message() {
        let errors = [
            BrowseError::InvalidRequestUrl {
                url: "::bad::".to_string(),
            },
            BrowseError::EmptyResponseBody {
                endpoint: "breeds/list/all".to_string(),
            },
            BrowseError::DecodeError {
                endpoint: "breeds/list/all".to_string(),
            },
        ];

        let messages: Vec<String> = errors.iter().map(|e| e.user_friendly_message()).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_decode_message_hides_parser_diagnostic() {
        let parse_failure = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = BrowseError::DecodeError {
            endpoint: "breeds/list/all".to_string(),
        };

        // The serde diagnostic text must never leak into the user message.
        assert!(!error
            .user_friendly_message()
            .contains(&parse_failure.to_string()));
    }

    #[test]
    fn test_severity_mapping() {
        let config_error = BrowseError::MissingConfigError {
            field: "api.base_url".to_string(),
        };
        assert_eq!(config_error.severity(), ErrorSeverity::Critical);

        let decode_error = BrowseError::DecodeError {
            endpoint: "breed/akita/images/random".to_string(),
        };
        assert_eq!(decode_error.severity(), ErrorSeverity::High);
        assert_eq!(decode_error.category(), ErrorCategory::Decode);
    }
}
