//! # Record Trait
//!
//! The `Record` trait is the contract every type stored by a [`StoreActor`](crate::StoreActor)
//! must satisfy. It names the key type, the creation payload, the error type and the
//! ephemeral per-store session that lives next to the records.
//!
//! # Architecture Note
//! The actor loop is written *once* against this trait. A board of orders, a list of
//! notes, anything keyed by an id can be stored without touching the actor code.
//!
//! Associated types keep the requests type-safe: an `Order` store only accepts an
//! `Order` creation payload and only hands back `Order` records.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be owned by a `StoreActor`.
///
/// # Ids
/// Ids are allocated by the actor from a monotonic `u32` counter and converted with
/// `From<u32>`. The counter never goes backwards, so an id is never handed out twice,
/// even after the record it named was deleted.
///
/// # Session
/// `Session` is ephemeral state owned by the store next to the records (for a board,
/// the drag gesture in progress). It starts as `Default::default()` and is only
/// changed through [`StoreClient::update_session`](crate::StoreClient::update_session).
pub trait Record: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Ephemeral store-wide state kept next to the records.
    type Session: Default + Clone + PartialEq + Send + Sync + Debug;

    /// The error type for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key this record is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from a freshly allocated id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;
}
