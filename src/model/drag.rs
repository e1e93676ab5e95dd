use crate::model::{Column, OrderId};

/// The drag gesture in progress, owned by the order store.
///
/// `dragging` is set at drag-start, `over` follows the pointer on every drag-over,
/// and both are cleared when the gesture ends by drop or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    pub over: Option<Column>,
    pub dragging: Option<OrderId>,
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.over.is_some()
    }
}
