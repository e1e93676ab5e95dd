//! # Order Board
//!
//! > **A kanban board for restaurant orders, driven by one store actor.**
//!
//! Orders are added, edited, dragged between columns and deleted. All board state
//! (the orders and the drag gesture in progress) lives in a single
//! [`StoreActor`](store_actor::StoreActor) task; everything else talks to it through
//! a cloneable [`OrderClient`](clients::OrderClient) and projects the results onto a
//! [`View`](view::View).
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Order`](model::Order), the closed [`Column`](model::Column) set and the
//! [`DragSession`](model::DragSession).
//!
//! ### 2. The Store ([`order_actor`], [`clients`])
//! The order store actor and the lifecycle client: create, update (the id is kept),
//! move, delete, plus the drag session.
//!
//! ### 3. Drag and Drop ([`drag`])
//! The drop-target resolver: walks an event path innermost first to the first area
//! marker, records it, and keeps at most one column marked.
//!
//! ### 4. The UI ([`view`], [`board`])
//! The [`View`](view::View) seam with an in-memory [`BoardView`](view::BoardView),
//! and the [`Board`](board::Board) controller that turns [`UiEvent`](board::UiEvent)s
//! into store calls and view updates.
//!
//! ### 5. Start-up ([`config`], [`lifecycle`])
//! The validated column configuration and [`BoardSystem`](lifecycle::BoardSystem),
//! which spawns the store and shuts it down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run -- board.toml
//! ```

pub mod board;
pub mod clients;
pub mod config;
pub mod drag;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod view;
