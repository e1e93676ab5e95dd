//! A ticket on the board.
//!
//! # Store
//! [`Order`] implements the [`Record`](store_actor::Record) trait, so it can be owned
//! by a [`StoreActor`](store_actor::StoreActor). See the `order_actor` module for the
//! implementation and [`OrderFields`] for the creation payload.
use crate::model::Column;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub title: String,
    pub table: String,
    pub column: Column,
}

/// The user-editable part of an order: what the add and edit forms submit.
///
/// Empty strings are accepted as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFields {
    pub title: String,
    pub table: String,
    pub column: Column,
}

impl OrderFields {
    pub fn new(title: impl Into<String>, table: impl Into<String>, column: Column) -> Self {
        Self {
            title: title.into(),
            table: table.into(),
            column,
        }
    }
}

impl Order {
    pub fn new(id: OrderId, fields: OrderFields) -> Self {
        Self {
            id,
            title: fields.title,
            table: fields.table,
            column: fields.column,
        }
    }

    pub fn fields(&self) -> OrderFields {
        OrderFields {
            title: self.title.clone(),
            table: self.table.clone(),
            column: self.column,
        }
    }

    /// The replacement for this order after an edit. The id is kept.
    pub fn revised(&self, fields: OrderFields) -> Self {
        Self::new(self.id, fields)
    }
}

/// An order before and after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub previous: Order,
    pub current: Order,
}

impl Revision {
    /// Whether the update changed the order's column.
    pub fn moved(&self) -> bool {
        self.previous.column != self.current.column
    }
}
