//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Pass an existing file with --config or omit it to use the defaults.")
            }
            Self::ParseError { .. } => Some("Fix the TOML syntax in the configuration file."),
            Self::InvalidValue { field, .. } => Some(match field.as_str() {
                "classify.lib64_extensions" | "UNSYMLINK_LIB64_EXTENSIONS" => {
                    "Extensions must start with '.' and must not contain '/'."
                }
                _ => "Names must be non-empty basenames without '/'.",
            }),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::NotFound { .. } => "config.not_found",
            Self::ParseError { .. } => "config.parse_error",
            Self::InvalidValue { .. } => "config.invalid_value",
        })
    }
}
