//! Board data: orders, columns and the drag session.

pub mod column;
pub mod drag;
pub mod order;

pub use column::*;
pub use drag::*;
pub use order::*;
