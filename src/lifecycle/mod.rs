//! # System Lifecycle
//!
//! Starts and stops the board: the order store actor is spawned when the system
//! starts and ends when the last client to it is dropped, so its lifetime is the
//! application's lifetime rather than that of a global.
//!
//! - [`BoardSystem`]: spawns the store, owns the [`Board`](crate::board::Board), shuts down
//! - [`setup_tracing`]: logging set-up for binaries

pub mod board_system;
pub mod tracing;

pub use board_system::*;
pub use self::tracing::setup_tracing;
