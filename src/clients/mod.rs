//! Type-safe wrappers around [`StoreClient`](store_actor::StoreClient).

pub mod order_client;

pub use order_client::*;
