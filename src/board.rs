//! # Board Controller
//!
//! The UI shell. It receives user gestures as [`UiEvent`]s, calls the order lifecycle
//! and the drag resolver, and projects every result onto the [`View`].
//!
//! Overlay behaviour:
//!
//! - The "Add Order" button is focused when the board starts.
//! - Closing any overlay returns focus to "Add Order".
//! - The add overlay opens with a blank form; submitting places the new order in
//!   [`Column::Ordered`].
//! - Clicking an order opens the edit overlay filled with that order. Update replaces
//!   the card (old one removed, new projection placed in the chosen column); delete
//!   removes both the order and its card; cancel changes nothing.
//!
//! Every handler runs to completion before the next event is taken, so each sees the
//! store exactly as the previous handler left it.

use crate::clients::OrderClient;
use crate::drag::{AreaMarker, DragOverEvent, DragResolver, Element};
use crate::error::BoardError;
use crate::model::{Column, OrderFields, OrderId};
use crate::view::{Control, Overlay, View};
use store_actor::RecordClient;
use tracing::{debug, info, instrument, warn};

/// Inbound gestures from the UI.
#[derive(Debug, Clone)]
pub enum UiEvent {
    HelpToggle,
    /// The "Add Order" button, or cancel inside the add overlay.
    AddToggle,
    AddSubmit { title: String, table: String },
    OrderClicked(OrderId),
    EditCancel,
    EditSubmit { title: String, table: String, column: Column },
    DeleteClicked,
    DragStart(OrderId),
    DragOver(DragOverEvent<Element>),
    Drop,
    DragEnd,
}

/// Drives the view from user gestures.
pub struct Board<V: View> {
    orders: OrderClient,
    drag: DragResolver,
    view: V,
    editing: Option<OrderId>,
}

impl<V: View> Board<V> {
    pub fn new(orders: OrderClient, mut view: V) -> Self {
        view.focus(Control::AddOrder);
        Self {
            drag: DragResolver::new(orders.clone()),
            orders,
            view,
            editing: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the board, releasing its store clients.
    pub fn into_view(self) -> V {
        self.view
    }

    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }

    /// The order the edit overlay is currently showing.
    pub fn editing(&self) -> Option<OrderId> {
        self.editing
    }

    /// Routes one event to its handler.
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<(), BoardError> {
        match event {
            UiEvent::HelpToggle => self.toggle_help(),
            UiEvent::AddToggle => self.toggle_add(),
            UiEvent::AddSubmit { title, table } => {
                self.submit_add(title, table).await?;
            }
            UiEvent::OrderClicked(id) => self.open_edit(id).await?,
            UiEvent::EditCancel => self.cancel_edit(),
            UiEvent::EditSubmit { title, table, column } => {
                self.submit_edit(OrderFields { title, table, column }).await?
            }
            UiEvent::DeleteClicked => self.delete_editing().await?,
            UiEvent::DragStart(id) => self.drag_start(id).await?,
            UiEvent::DragOver(mut event) => {
                self.drag_over(&mut event).await?;
            }
            UiEvent::Drop => self.drop_order().await?,
            UiEvent::DragEnd => self.drag_end().await?,
        }
        Ok(())
    }

    fn close(&mut self, overlay: Overlay) {
        self.view.hide_overlay(overlay);
        self.view.focus(Control::AddOrder);
    }

    pub fn toggle_help(&mut self) {
        if self.view.is_open(Overlay::Help) {
            self.close(Overlay::Help);
        } else {
            self.view.show_overlay(Overlay::Help);
        }
    }

    pub fn toggle_add(&mut self) {
        if self.view.is_open(Overlay::Add) {
            self.close(Overlay::Add);
        } else {
            self.view.reset_form(Overlay::Add);
            self.view.show_overlay(Overlay::Add);
            self.view.focus(Control::AddTitle);
        }
    }

    /// Creates an order in the first column and closes the add overlay.
    #[instrument(skip(self))]
    pub async fn submit_add(&mut self, title: String, table: String) -> Result<OrderId, BoardError> {
        let order = self
            .orders
            .create(OrderFields::new(title, table, Column::Ordered))
            .await?;
        let card = self.view.render(&order);
        self.view.place(card, order.column);
        self.view.reset_form(Overlay::Add);
        self.close(Overlay::Add);
        Ok(order.id)
    }

    /// Opens the edit overlay for `id`. Unknown orders leave everything as it is.
    pub async fn open_edit(&mut self, id: OrderId) -> Result<(), BoardError> {
        let Some(order) = self.orders.get(id).await? else {
            warn!(%id, "Clicked order is not in the store");
            return Ok(());
        };
        self.view.fill_form(Overlay::Edit, &order.fields());
        self.view.show_overlay(Overlay::Edit);
        self.view.focus(Control::EditTitle);
        self.editing = Some(id);
        debug!(%id, "Editing order");
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.close(Overlay::Edit);
    }

    /// Applies the edit form to the order being edited.
    ///
    /// The stale card is always removed; a new one is placed only if the order still
    /// exists.
    #[instrument(skip(self))]
    pub async fn submit_edit(&mut self, fields: OrderFields) -> Result<(), BoardError> {
        if let Some(id) = self.editing.take() {
            let revision = self.orders.update(id, fields).await?;
            self.view.remove(&id);
            if let Some(revision) = revision {
                let card = self.view.render(&revision.current);
                self.view.place(card, revision.current.column);
            }
        }
        self.close(Overlay::Edit);
        Ok(())
    }

    /// Deletes the order being edited along with its card.
    pub async fn delete_editing(&mut self) -> Result<(), BoardError> {
        if let Some(id) = self.editing.take() {
            self.orders.delete(id).await?;
            self.view.remove(&id);
            info!(%id, "Order deleted");
        }
        self.close(Overlay::Edit);
        Ok(())
    }

    pub async fn drag_start(&mut self, id: OrderId) -> Result<(), BoardError> {
        self.drag.start(id, &mut self.view).await?;
        Ok(())
    }

    pub async fn drag_over<N: AreaMarker>(
        &mut self,
        event: &mut DragOverEvent<N>,
    ) -> Result<Option<Column>, BoardError> {
        Ok(self.drag.over(event, &mut self.view).await?)
    }

    pub async fn drop_order(&mut self) -> Result<(), BoardError> {
        self.drag.complete_drop(&mut self.view).await?;
        Ok(())
    }

    pub async fn drag_end(&mut self) -> Result<(), BoardError> {
        self.drag.end(&mut self.view).await?;
        Ok(())
    }
}
