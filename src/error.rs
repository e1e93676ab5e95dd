//! Errors surfaced by the board controller and system lifecycle.

use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// The order store could not be reached.
    #[error(transparent)]
    Store(#[from] OrderError),

    /// The store task ended abnormally.
    #[error("Store task failed: {0}")]
    TaskFailed(String),
}
