//! # Order Store
//!
//! The order store is a [`StoreActor`] over [`Order`] records. It owns every order on
//! the board plus the [`DragSession`](crate::model::DragSession), and is reached through
//! an [`OrderClient`].
//!
//! ## Structure
//!
//! - [`entity`]: [`Record`](store_actor::Record) implementation for [`Order`]
//! - [`error`]: [`OrderError`]
//! - [`new()`]: factory returning the actor and its client
//!
//! ```rust
//! use order_board::model::{Column, OrderFields};
//! use order_board::order_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, orders) = order_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let order = orders.create(OrderFields::new("Burger", "12", Column::Ordered)).await?;
//!     assert_eq!(order.id.to_string(), "order_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use store_actor::StoreActor;

/// Creates a new order store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Order>, OrderClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
