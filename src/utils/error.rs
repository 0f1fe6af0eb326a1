use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Distance lookup request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unknown transport mode: {mode}")]
    UnknownModeError { mode: String },

    #[error("Route not found: {origin} -> {destination}")]
    RouteNotFoundError { origin: String, destination: String },

    #[error("Distance provider '{provider}' failed: {message}")]
    ProviderError { provider: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::ApiError(_) | CalcError::ProviderError { .. } => ErrorCategory::Network,
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CalcError::ValidationError { .. }
            | CalcError::UnknownModeError { .. }
            | CalcError::RouteNotFoundError { .. } => ErrorCategory::Input,
            CalcError::CsvError(_) | CalcError::SerializationError(_) => ErrorCategory::Data,
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::ApiError(_) | CalcError::ProviderError { .. } => {
                "Check network connectivity and the distance provider endpoint, or pass --distance manually".to_string()
            }
            CalcError::RouteNotFoundError { .. } => {
                "Check the city names (e.g. \"São Paulo, SP\") or enter the distance manually".to_string()
            }
            CalcError::UnknownModeError { .. } => {
                "Use one of: bicycle, car, bus, truck, and make sure it has an emission factor".to_string()
            }
            CalcError::ValidationError { .. } => "Review the trip input values".to_string(),
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => {
                "Review the TOML configuration file".to_string()
            }
            CalcError::CsvError(_) => {
                "Make sure the routes file has origin,destination,distance_km columns".to_string()
            }
            CalcError::SerializationError(_) => "Check the JSON payload format".to_string(),
            CalcError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::RouteNotFoundError { origin, destination } => {
                format!("Route not found: {} → {}", origin, destination)
            }
            CalcError::UnknownModeError { mode } => {
                format!("Transport mode '{}' is not supported", mode)
            }
            CalcError::ApiError(_) | CalcError::ProviderError { .. } => {
                "Could not reach the distance service".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_found_is_input_error() {
        let err = CalcError::RouteNotFoundError {
            origin: "A".to_string(),
            destination: "B".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("A → B"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = CalcError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
