//! Drag-and-drop: event paths and the drop-target resolver.

pub mod path;
pub mod resolver;

pub use path::*;
pub use resolver::*;
