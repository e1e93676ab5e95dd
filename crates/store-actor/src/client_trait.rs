//! # RecordClient Trait
//!
//! Gives domain-specific client wrappers the plain store operations (`get`, `delete`,
//! `list`) for free, with their own error type.
use crate::{FrameworkError, Record, StoreClient};
use async_trait::async_trait;

/// Trait for domain clients that wrap a [`StoreClient`].
///
/// Implementors only provide access to the inner client and an error mapping.
///
/// ```rust
/// use store_actor::{FrameworkError, Record, RecordClient, StoreClient};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32 }
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error: {0}")]
/// struct NoteError(String);
///
/// impl From<String> for NoteError {
///     fn from(s: String) -> Self { NoteError(s) }
/// }
///
/// impl Record for Note {
///     type Id = u32;
///     type Create = ();
///     type Session = ();
///     type Error = NoteError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
/// }
///
/// struct NoteClient { inner: StoreClient<Note> }
///
/// impl RecordClient<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &StoreClient<Note> { &self.inner }
///     fn map_error(e: FrameworkError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get(), delete() and list() come from the trait
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait RecordClient<T: Record>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id. `None` when it does not exist.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by id. Deleting an absent record is not an error.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// All records, ordered by id.
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        self.inner().list().await.map_err(Self::map_error)
    }
}
