//! # Store Actor
//!
//! The `StoreActor` is the server half of the framework. It owns the records and the
//! session, and processes [`StoreRequest`]s one at a time in its own Tokio task.

use crate::client::StoreClient;
use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a collection of records and their session.
///
/// # Concurrency Model
/// There is exactly one task touching `store` and `session`. Requests are handled to
/// completion in arrival order, so a caller always observes the state left by the
/// request before it. No `Mutex` or `RwLock` is needed.
///
/// # Usage Pattern
///
/// 1. **Create**: `StoreActor::new()` returns the actor and its client.
/// 2. **Run**: spawn `actor.run()` on the runtime.
/// 3. **Use**: clone the client into whatever needs the store.
///
/// The actor stops once every client has been dropped.
///
/// ```rust
/// use store_actor::{Record, StoreActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// impl Record for Note {
///     type Id = u32;
///     type Create = String;
///     type Session = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> {
///         Ok(Self { id, text })
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(client.get(note.id).await.unwrap().unwrap().text, "hello");
/// }
/// ```
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    session: T::Session,
    /// `None` once every id has been handed out.
    next_id: Option<u32>,
}

impl<T: Record> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client
    /// calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            session: T::Session::default(),
            next_id: Some(1),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until the channel closes.
    pub async fn run(mut self) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw) = self.next_id else {
                        warn!(entity_type, "Create refused, ids exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    self.next_id = raw.checked_add(1);
                    let id = T::Id::from(raw);

                    match T::from_create_params(id.clone(), params) {
                        Ok(record) => {
                            self.store.insert(id.clone(), record.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(record));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::RecordError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Put { record, respond_to } => {
                    let id = record.id().clone();
                    let replaced = self.store.insert(id.clone(), record).is_some();
                    info!(entity_type, %id, replaced, size = self.store.len(), "Put");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Update {
                    id,
                    apply,
                    respond_to,
                } => {
                    let revision = self.store.get(&id).cloned().map(|previous| {
                        let current = apply(&previous);
                        if current.id() != &id {
                            warn!(entity_type, %id, new_id = %current.id(), "Update changed the id, keeping the old key");
                        }
                        self.store.insert(id.clone(), current.clone());
                        (previous, current)
                    });
                    debug!(entity_type, %id, found = revision.is_some(), "Update");
                    let _ = respond_to.send(Ok(revision));
                }
                StoreRequest::Delete { id, respond_to } => {
                    let removed = self.store.remove(&id).is_some();
                    if removed {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Delete of absent record");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
                StoreRequest::List { respond_to } => {
                    let mut records: Vec<T> = self.store.values().cloned().collect();
                    records.sort_by(|a, b| a.id().cmp(b.id()));
                    debug!(entity_type, size = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
                StoreRequest::Session { respond_to } => {
                    let _ = respond_to.send(Ok(self.session.clone()));
                }
                StoreRequest::UpdateSession { apply, respond_to } => {
                    let before = self.session.clone();
                    apply(&mut self.session);
                    let changed = before != self.session;
                    debug!(entity_type, changed, session = ?self.session, "UpdateSession");
                    let _ = respond_to.send(Ok(changed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Slot {
        id: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("slot error")]
    struct SlotError;

    impl Record for Slot {
        type Id = u32;
        type Create = ();
        type Session = ();
        type Error = SlotError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, _: ()) -> Result<Self, SlotError> {
            Ok(Self { id })
        }
    }

    #[tokio::test]
    async fn test_create_fails_once_ids_run_out() {
        let (mut actor, client) = StoreActor::<Slot>::new(4);
        actor.next_id = Some(u32::MAX);
        tokio::spawn(actor.run());

        let last = client.create(()).await.unwrap();
        assert_eq!(last.id, u32::MAX);

        assert!(matches!(
            client.create(()).await,
            Err(FrameworkError::IdsExhausted)
        ));
        assert_eq!(client.list().await.unwrap(), vec![Slot { id: u32::MAX }]);
    }
}
