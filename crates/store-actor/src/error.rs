//! # Store Errors
//!
//! Errors raised by the plumbing between a [`StoreClient`](crate::StoreClient) and its
//! actor. A missing record is *not* an error: lookups answer with `Option`.

/// Errors that can occur within the store actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Store has no ids left to allocate")]
    IdsExhausted,
    #[error("Record error: {0}")]
    RecordError(Box<dyn std::error::Error + Send + Sync>),
}
