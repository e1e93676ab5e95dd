//! Error types for the order store.

use thiserror::Error;

/// Errors that can occur during order operations.
///
/// A missing order is not one of them: lookups and updates answer `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The store actor could not be reached or did not answer.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
