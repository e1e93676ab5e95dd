use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::view::View;
use tracing::{error, info};

/// Runtime owner of the order store and the board that drives it.
///
/// `BoardSystem` is responsible for:
/// - **Start-up**: spawning the order store actor with the configured channel size
/// - **Wiring**: handing the store client to the board controller
/// - **Shutdown**: dropping the board so the store's channel closes, then waiting for
///   the store task
///
/// # Example
///
/// ```ignore
/// let config = BoardConfig::default();
/// let mut system = BoardSystem::start(&config, BoardView::new(&config));
///
/// system.board.dispatch(UiEvent::AddToggle).await?;
/// system.board.dispatch(UiEvent::AddSubmit { title: "Burger".into(), table: "12".into() }).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BoardSystem<V: View> {
    /// The board controller. Events go in here.
    pub board: Board<V>,

    /// The order store task (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl<V: View> BoardSystem<V> {
    /// Spawns the order store and builds the board around `view`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &BoardConfig, view: V) -> Self {
        let (store_actor, orders) = crate::order_actor::new(config.store.channel_capacity);
        let handle = tokio::spawn(store_actor.run());
        info!(columns = config.columns.len(), "Board started");

        Self {
            board: Board::new(orders, view),
            handle,
        }
    }

    /// Gracefully shuts the system down and hands back the final view.
    ///
    /// Clients cloned out of the board keep the store alive; drop them first or this
    /// waits for them.
    pub async fn shutdown(self) -> Result<V, BoardError> {
        info!("Shutting down board...");

        let view = self.board.into_view();

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(BoardError::TaskFailed(e.to_string()));
        }

        info!("Board shutdown complete.");
        Ok(view)
    }
}
