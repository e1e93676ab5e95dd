//! # Drop-Target Resolution
//!
//! A drag-over event can land on any element inside a column: the column itself, a
//! card in it, a label in the card. The resolver walks the event path innermost to
//! outermost and takes the first element that carries an area marker, skipping
//! everything unmarked. A card inside a column therefore resolves to the column, and
//! a marker further out (on the body, say) is never reached.
//!
//! | Path | Result | Store | View |
//! |---|---|---|---|
//! | empty | `None` | untouched | untouched |
//! | no marker | `None` | untouched | untouched |
//! | marker naming no column | `None` | untouched | untouched |
//! | marker, new target | `Some(column)` | `over` set | column marked |
//! | marker, same target | `Some(column)` | unchanged | untouched |

use crate::clients::OrderClient;
use crate::drag::{AreaMarker, DragOverEvent};
use crate::model::{Column, OrderId, Revision};
use crate::order_actor::OrderError;
use crate::view::View;
use tracing::{debug, info, warn};

/// The first area marker on the path, innermost first.
pub fn find_area<N: AreaMarker>(path: &[N]) -> Option<&str> {
    path.iter().find_map(|element| element.area())
}

/// The column named by the first area marker on the path.
///
/// A marker naming no known column resolves to nothing; the scan does not continue
/// past it.
pub fn resolve_column<N: AreaMarker>(path: &[N]) -> Option<Column> {
    let area = find_area(path)?;
    match area.parse() {
        Ok(column) => Some(column),
        Err(e) => {
            warn!(error = %e, "Area marker names no column");
            None
        }
    }
}

/// Tracks drag gestures against the order store.
#[derive(Clone)]
pub struct DragResolver {
    orders: OrderClient,
}

impl DragResolver {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    /// Drag-start: remembers which order is being carried and clears any target
    /// left over from an earlier gesture, in the store and on the view.
    pub async fn start<V: View>(&self, id: OrderId, view: &mut V) -> Result<(), OrderError> {
        view.mark_targeted(None);
        self.orders.begin_drag(id).await?;
        debug!(%id, "Drag started");
        Ok(())
    }

    /// Drag-over: resolves the column under the pointer.
    ///
    /// Always suppresses the event's default so the whole column stays a valid drop
    /// surface. When a column is found and differs from the current target, it is
    /// recorded in the store and marked on the view; otherwise nothing changes.
    pub async fn over<N: AreaMarker, V: View>(
        &self,
        event: &mut DragOverEvent<N>,
        view: &mut V,
    ) -> Result<Option<Column>, OrderError> {
        event.prevent_default();

        let Some(column) = resolve_column(&event.path) else {
            return Ok(None);
        };

        if self.orders.set_drag_target(Some(column)).await? {
            debug!(%column, "Drag target changed");
            view.mark_targeted(Some(column));
        }
        Ok(Some(column))
    }

    /// Drop: moves the carried order into the targeted column, then ends the gesture.
    ///
    /// Answers the revision when an order was moved. Dropping onto the column the
    /// order is already in, or without a carried order or target, moves nothing.
    /// The targeted mark is cleared even when the store fails.
    pub async fn complete_drop<V: View>(&self, view: &mut V) -> Result<Option<Revision>, OrderError> {
        let moved = self.move_carried(view).await;
        let ended = self.end(view).await;
        let revision = moved?;
        ended?;
        Ok(revision)
    }

    async fn move_carried<V: View>(&self, view: &mut V) -> Result<Option<Revision>, OrderError> {
        let session = self.orders.drag_session().await?;
        let (Some(id), Some(column)) = (session.dragging, session.over) else {
            return Ok(None);
        };

        match self.orders.move_to(id, column).await? {
            Some(revision) if revision.moved() => {
                view.remove(&id);
                let card = view.render(&revision.current);
                view.place(card, column);
                info!(%id, %column, "Dropped into column");
                Ok(Some(revision))
            }
            _ => Ok(None),
        }
    }

    /// Drag-end or cancel: clears the session and any targeted mark.
    pub async fn end<V: View>(&self, view: &mut V) -> Result<(), OrderError> {
        view.mark_targeted(None);
        self.orders.end_drag().await?;
        debug!("Drag ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::drag::Element;
    use crate::model::{DragSession, Order};
    use crate::view::BoardView;
    use store_actor::mock::MockClient;
    use store_actor::FrameworkError;

    fn chain() -> Vec<Element> {
        vec![
            Element::new("span"),
            Element::new("div.order"),
            Element::new("div.column").with_area("preparing"),
            Element::new("body").with_area("serving"),
            Element::new("html").with_area("ordered"),
        ]
    }

    #[test]
    fn test_innermost_marker_wins() {
        assert_eq!(find_area(&chain()), Some("preparing"));
        assert_eq!(resolve_column(&chain()), Some(Column::Preparing));
    }

    #[test]
    fn test_marker_on_target_itself() {
        let path = vec![Element::new("div.column").with_area("serving"), Element::new("body")];
        assert_eq!(resolve_column(&path), Some(Column::Serving));
    }

    #[test]
    fn test_empty_and_unmarked_paths() {
        let empty: Vec<Element> = Vec::new();
        assert_eq!(resolve_column(&empty), None);

        let unmarked = vec![Element::new("span"), Element::new("body"), Element::new("html")];
        assert_eq!(resolve_column(&unmarked), None);
    }

    #[test]
    fn test_unknown_marker_stops_the_scan() {
        let path = vec![
            Element::new("div").with_area("archive"),
            Element::new("body").with_area("ordered"),
        ];
        assert_eq!(find_area(&path), Some("archive"));
        assert_eq!(resolve_column(&path), None);
    }

    fn resolver_over(store: &MockClient<Order>) -> DragResolver {
        DragResolver::new(OrderClient::new(store.client()))
    }

    #[tokio::test]
    async fn test_failed_drop_still_clears_the_mark() {
        let mut store = MockClient::<Order>::new();
        store.expect_session().return_ok(DragSession {
            over: Some(Column::Serving),
            dragging: Some(OrderId(1)),
        });
        store
            .expect_update(OrderId(1))
            .return_err(FrameworkError::ActorDropped);
        store.expect_update_session().return_ok(true);

        let mut view = BoardView::new(&BoardConfig::default());
        view.mark_targeted(Some(Column::Serving));

        let result = resolver_over(&store).complete_drop(&mut view).await;
        assert!(result.is_err());
        assert_eq!(view.targeted(), None);
        store.verify();
    }

    #[tokio::test]
    async fn test_start_clears_a_stale_mark() {
        let mut store = MockClient::<Order>::new();
        store.expect_update_session().return_ok(true);

        let mut view = BoardView::new(&BoardConfig::default());
        view.mark_targeted(Some(Column::Preparing));

        resolver_over(&store).start(OrderId(2), &mut view).await.unwrap();
        assert_eq!(view.targeted(), None);
        store.verify();
    }

    #[test]
    fn test_borrowed_elements_resolve() {
        let owned = chain();
        let borrowed: Vec<&Element> = owned.iter().collect();
        assert_eq!(resolve_column(&borrowed), Some(Column::Preparing));
    }
}
