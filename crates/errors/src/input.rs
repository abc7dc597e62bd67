//! Candidate list input error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum InputError {
    /// `origin` is a file path or `<stdin>`
    #[error("failed to read candidate list from {origin}: {message}")]
    ReadFailed { origin: String, message: String },
}

impl UserFacingError for InputError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ReadFailed { .. } => Some("Check that the list file exists and is readable."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::ReadFailed { .. } => Some("input.read_failed"),
        }
    }
}
