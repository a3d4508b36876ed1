use thiserror::Error;

/// Message returned to the platform whenever the envelope does not carry a cart.
pub const CART_NOT_FOUND: &str = "Cart object not found.";

#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ExtensionError {
    pub fn cart_not_found() -> Self {
        ExtensionError::InvalidInput {
            message: CART_NOT_FOUND.to_string(),
        }
    }

    /// Error code as understood by the commerce platform's extension API.
    pub fn code(&self) -> &'static str {
        match self {
            ExtensionError::InvalidInput { .. } => "InvalidInput",
            ExtensionError::ConfigError { .. }
            | ExtensionError::InvalidConfigValueError { .. }
            | ExtensionError::TomlError(_) => "ConfigurationError",
            ExtensionError::IoError(_) | ExtensionError::SerializationError(_) => "General",
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ExtensionError::InvalidInput { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtensionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_not_found_code_and_message() {
        let err = ExtensionError::cart_not_found();
        assert_eq!(err.code(), "InvalidInput");
        assert_eq!(err.public_message(), "Cart object not found.");
    }

    #[test]
    fn test_config_error_display() {
        let err = ExtensionError::InvalidConfigValueError {
            field: "port".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 65535".to_string(),
        };
        assert_eq!(err.code(), "ConfigurationError");
        assert!(err.to_string().contains("'port'"));
    }
}
