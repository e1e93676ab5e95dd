//! # Store Messages
//!
//! The request type sent from a [`StoreClient`](crate::StoreClient) to its
//! [`StoreActor`](crate::StoreActor). Every request carries a oneshot sender for
//! the reply.

use crate::error::FrameworkError;
use crate::record::Record;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A mutation applied to the session inside the actor task.
pub type SessionFn<S> = Box<dyn FnOnce(&mut S) + Send>;

/// Builds the replacement for a stored record inside the actor task.
pub type UpdateFn<T> = Box<dyn FnOnce(&T) -> T + Send>;

/// Internal message type sent to the actor to request operations.
///
/// - **Create**: allocates a fresh id and inserts the record built from the payload.
/// - **Get**: looks a record up; a miss answers `None`.
/// - **Put**: inserts or overwrites by the record's own id.
/// - **Update**: replaces an existing record in one step; answers the old and new
///   record, or `None` when the id is unknown.
/// - **Delete**: removes a record; answers whether anything was removed.
/// - **List**: snapshot of every record, ordered by id.
/// - **Session** / **UpdateSession**: read or mutate the ephemeral session. The
///   update answers whether the session value changed.
pub enum StoreRequest<T: Record> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Put {
        record: T,
        respond_to: Response<()>,
    },
    Update {
        id: T::Id,
        apply: UpdateFn<T>,
        respond_to: Response<Option<(T, T)>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Session {
        respond_to: Response<T::Session>,
    },
    UpdateSession {
        apply: SessionFn<T::Session>,
        respond_to: Response<bool>,
    },
}

impl<T: Record> fmt::Debug for StoreRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreRequest::Create { params, .. } => {
                f.debug_struct("Create").field("params", params).finish()
            }
            StoreRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            StoreRequest::Put { record, .. } => {
                f.debug_struct("Put").field("id", record.id()).finish()
            }
            StoreRequest::Update { id, .. } => f.debug_struct("Update").field("id", id).finish(),
            StoreRequest::Delete { id, .. } => f.debug_struct("Delete").field("id", id).finish(),
            StoreRequest::List { .. } => f.write_str("List"),
            StoreRequest::Session { .. } => f.write_str("Session"),
            StoreRequest::UpdateSession { .. } => f.write_str("UpdateSession"),
        }
    }
}
