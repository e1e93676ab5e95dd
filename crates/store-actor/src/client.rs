//! # Store Client
//!
//! The cloneable handle used to talk to a [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::record::Record;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `StoreActor`.
///
/// Holds only a channel sender, so cloning is cheap. Every method sends one request
/// and awaits the actor's reply.
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> StoreRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Allocates a fresh id and stores the record built from `params`.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    /// Inserts or overwrites the record under its own id.
    pub async fn put(&self, record: T) -> Result<(), FrameworkError> {
        self.request(|respond_to| StoreRequest::Put { record, respond_to })
            .await
    }

    /// Replaces the record under `id` with `apply(&current)` as one request.
    ///
    /// Answers the previous and the stored record, or `None` without writing when
    /// `id` is unknown. The replacement is stored under `id`.
    pub async fn update(
        &self,
        id: T::Id,
        apply: impl FnOnce(&T) -> T + Send + 'static,
    ) -> Result<Option<(T, T)>, FrameworkError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            apply: Box::new(apply),
            respond_to,
        })
        .await
    }

    /// Removes a record. Returns `false` when there was nothing to remove.
    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn session(&self) -> Result<T::Session, FrameworkError> {
        self.request(|respond_to| StoreRequest::Session { respond_to })
            .await
    }

    /// Applies `apply` to the session inside the actor task.
    ///
    /// Returns `true` when the session value differs afterwards.
    pub async fn update_session(
        &self,
        apply: impl FnOnce(&mut T::Session) + Send + 'static,
    ) -> Result<bool, FrameworkError> {
        self.request(|respond_to| StoreRequest::UpdateSession {
            apply: Box::new(apply),
            respond_to,
        })
        .await
    }
}
