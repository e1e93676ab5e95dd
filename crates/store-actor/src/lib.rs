//! # Store Actor
//!
//! A small framework for keeping a keyed collection of records inside a single Tokio
//! task and talking to it through a cloneable client.
//!
//! ## Why an actor?
//!
//! - **One owner**: the records and the session belong to exactly one task, so there is
//!   no shared mutable state and no locking.
//! - **Ordered**: requests are handled to completion in arrival order. Whoever sends
//!   a request sees the state left by the previous one.
//! - **Explicit lifetime**: the store lives as long as its clients. Dropping the last
//!   client ends the task, which makes start-up and shutdown part of the application's
//!   own lifecycle instead of a global.
//!
//! ## Layers
//!
//! 1. **Record layer** ([`Record`]): the stored type, its id, creation payload and
//!    session.
//! 2. **Runtime layer** ([`StoreActor`]): the message loop.
//! 3. **Interface layer** ([`StoreClient`], [`RecordClient`]): typed async calls.
//!
//! ## Operations
//!
//! | Request | Answer | Notes |
//! |---|---|---|
//! | `create` | the new record | id from a counter that never repeats; fails once the counter is spent |
//! | `get` | `Option<T>` | a miss is not an error |
//! | `put` | `()` | insert or overwrite |
//! | `update` | `Option<(old, new)>` | read and replace in one request |
//! | `delete` | `bool` | idempotent |
//! | `list` | `Vec<T>` | ordered by id |
//! | `session` / `update_session` | session / changed flag | |
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a script so client wrappers can be
//! tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::RecordClient;
pub use error::FrameworkError;
pub use message::{Response, SessionFn, StoreRequest, UpdateFn};
pub use record::Record;
