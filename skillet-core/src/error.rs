use crate::validate::ValidationErrors;
use thiserror::Error;

/// Failure talking to the collection service.
///
/// Success is decided solely by the HTTP status class; any non-2xx
/// response is [`ApiError::Status`] regardless of body content.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("response does not match the recipe shape: {0}")]
    Shape(String),
}

/// Failure submitting a form draft.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The draft failed validation; nothing was sent.
    #[error("draft failed validation: {0}")]
    Invalid(ValidationErrors),

    /// The form has no loaded record to submit.
    #[error("form is not ready to submit")]
    NotReady,

    #[error(transparent)]
    Api(#[from] ApiError),
}
