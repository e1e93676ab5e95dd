//! [`Record`] implementation for [`Order`].

use crate::model::{DragSession, Order, OrderFields, OrderId};
use crate::order_actor::OrderError;
use store_actor::Record;

impl Record for Order {
    type Id = OrderId;
    type Create = OrderFields;
    type Session = DragSession;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Builds the order as given. Empty title or table are kept, never rejected.
    fn from_create_params(id: OrderId, params: OrderFields) -> Result<Self, OrderError> {
        Ok(Order::new(id, params))
    }
}
