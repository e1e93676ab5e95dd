//! # View Projection
//!
//! The [`View`] trait is the seam between the board logic and whatever draws it. The
//! board only ever *tells* the view what to show; the view never writes back to the
//! order store.
//!
//! [`BoardView`] is the in-memory implementation used by the headless shell, the demo
//! binary and the tests.

pub mod board_view;

pub use board_view::*;

use crate::model::{Column, Order, OrderFields, OrderId};
use serde::{Deserialize, Serialize};

/// Modal overlays the shell can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overlay {
    Help,
    Add,
    Edit,
}

/// Controls that can take focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// The "Add Order" button. Focus returns here whenever an overlay closes.
    AddOrder,
    AddTitle,
    EditTitle,
}

/// Outbound calls the board makes on the UI.
pub trait View {
    /// The visual node for one order.
    type Element;

    /// Builds the visual node for `order`. No placement happens here.
    fn render(&self, order: &Order) -> Self::Element;

    /// Appends `element` to the container of `column`.
    fn place(&mut self, element: Self::Element, column: Column);

    /// Removes the node for `id` wherever it is. Answers whether one was found.
    fn remove(&mut self, id: &OrderId) -> bool;

    /// Marks `column` as the drop target and clears the mark everywhere else.
    /// `None` clears every mark.
    fn mark_targeted(&mut self, column: Option<Column>);

    fn show_overlay(&mut self, overlay: Overlay);

    fn hide_overlay(&mut self, overlay: Overlay);

    fn is_open(&self, overlay: Overlay) -> bool;

    fn focus(&mut self, control: Control);

    /// Blanks the form of `overlay`.
    fn reset_form(&mut self, overlay: Overlay);

    /// Fills the form of `overlay` with `fields`.
    fn fill_form(&mut self, overlay: Overlay, fields: &OrderFields);
}
