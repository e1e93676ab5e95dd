//! # Order Client
//!
//! The order lifecycle: create, update, move and delete orders in the store, and
//! keep the drag session. Nothing here touches the view; every result is handed
//! back for the caller to project.
use crate::model::{Column, DragSession, Order, OrderFields, OrderId, Revision};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use store_actor::{FrameworkError, RecordClient, StoreClient};
use tracing::{debug, info, instrument, warn};

/// Client for the order store.
///
/// `get`, `delete` and `list` come from [`RecordClient`]. Deleting an order that is
/// not there is a no-op that answers `false`.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores a new order under a fresh id and returns it.
    #[instrument(skip(self))]
    pub async fn create(&self, fields: OrderFields) -> Result<Order, OrderError> {
        let order = self.inner.create(fields).await.map_err(Self::map_error)?;
        info!(id = %order.id, column = %order.column, "Order created");
        Ok(order)
    }

    /// Inserts or overwrites an order under its own id.
    pub async fn put(&self, order: Order) -> Result<(), OrderError> {
        self.inner.put(order).await.map_err(Self::map_error)
    }

    /// Replaces the order's fields, keeping its id.
    ///
    /// Read and write happen in one store request, so an order deleted through
    /// another client is never brought back. Answers `None` and writes nothing when
    /// the order does not exist.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: OrderId,
        fields: OrderFields,
    ) -> Result<Option<Revision>, OrderError> {
        self.replace(id, move |order| order.revised(fields)).await
    }

    /// Moves an order to another column, keeping title and table.
    #[instrument(skip(self))]
    pub async fn move_to(
        &self,
        id: OrderId,
        column: Column,
    ) -> Result<Option<Revision>, OrderError> {
        self.replace(id, move |order| {
            order.revised(OrderFields {
                column,
                ..order.fields()
            })
        })
        .await
    }

    async fn replace(
        &self,
        id: OrderId,
        revise: impl FnOnce(&Order) -> Order + Send + 'static,
    ) -> Result<Option<Revision>, OrderError> {
        let Some((previous, current)) = self
            .inner
            .update(id, revise)
            .await
            .map_err(Self::map_error)?
        else {
            warn!(%id, "Update of unknown order");
            return Ok(None);
        };

        let revision = Revision { previous, current };
        if revision.moved() {
            info!(
                %id,
                from = %revision.previous.column,
                to = %revision.current.column,
                "Order moved"
            );
        } else {
            debug!(%id, "Order updated in place");
        }
        Ok(Some(revision))
    }

    pub async fn len(&self) -> Result<usize, OrderError> {
        Ok(self.list().await?.len())
    }

    pub async fn is_empty(&self) -> Result<bool, OrderError> {
        Ok(self.len().await? == 0)
    }

    pub async fn drag_session(&self) -> Result<DragSession, OrderError> {
        self.inner.session().await.map_err(Self::map_error)
    }

    /// Overwrites the column under the pointer. Answers whether it changed.
    pub async fn set_drag_target(&self, over: Option<Column>) -> Result<bool, OrderError> {
        self.inner
            .update_session(move |session| session.over = over)
            .await
            .map_err(Self::map_error)
    }

    /// Starts a gesture carrying `id`. Any target left from before is dropped.
    pub async fn begin_drag(&self, id: OrderId) -> Result<(), OrderError> {
        self.inner
            .update_session(move |session| {
                *session = DragSession {
                    over: None,
                    dragging: Some(id),
                }
            })
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Clears the drag session.
    pub async fn end_drag(&self) -> Result<(), OrderError> {
        self.inner
            .update_session(|session| *session = DragSession::default())
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl RecordClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
