use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration file: {0}")]
    IOError(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigurationError {
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> ConfigurationError {
        ConfigurationError::InvalidValue { field, reason: reason.into() }
    }
}
