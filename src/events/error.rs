use super::EventFailure;

/// Errors raised while ingesting a provider event.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// Processing failed; the original payload travels with the error.
    #[error(transparent)]
    Failure(#[from] EventFailure),
    #[error("malformed event body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("event body is not a JSON object")]
    NotAnObject,
}

impl EventError {
    /// The carried failure, if this error is one.
    pub fn as_failure(&self) -> Option<&EventFailure> {
        match self {
            EventError::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}
