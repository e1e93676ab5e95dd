use order_board::clients::OrderClient;
use order_board::model::{Column, Order, OrderFields, OrderId};
use order_board::order_actor::OrderError;
use store_actor::mock::MockClient;
use store_actor::FrameworkError;

fn burger(column: Column) -> Order {
    Order::new(OrderId(1), OrderFields::new("Burger", "12", column))
}

/// Client logic test: the lifecycle client against a scripted store.
#[tokio::test]
async fn test_update_of_unknown_order_writes_nothing() {
    let mut store = MockClient::<Order>::new();
    store.expect_update(OrderId(7)).return_ok(None);

    let orders = OrderClient::new(store.client());
    let result = orders
        .update(OrderId(7), OrderFields::new("Soup", "3", Column::Serving))
        .await;

    assert_eq!(result, Ok(None));
    assert!(store.puts().is_empty());
    store.verify();
}

#[tokio::test]
async fn test_update_keeps_the_id_and_puts_the_replacement() {
    let mut store = MockClient::<Order>::new();
    store
        .expect_update(OrderId(1))
        .return_ok(Some(burger(Column::Ordered)));

    let orders = OrderClient::new(store.client());
    let revision = orders
        .update(OrderId(1), OrderFields::new("Burger", "12", Column::Serving))
        .await
        .unwrap()
        .expect("order exists");

    assert!(revision.moved());
    assert_eq!(revision.previous.column, Column::Ordered);
    assert_eq!(revision.current.id, OrderId(1));
    assert_eq!(store.puts(), vec![burger(Column::Serving)]);
    store.verify();
}

#[tokio::test]
async fn test_move_keeps_title_and_table() {
    let mut store = MockClient::<Order>::new();
    store
        .expect_update(OrderId(1))
        .return_ok(Some(burger(Column::Ordered)));

    let orders = OrderClient::new(store.client());
    let revision = orders
        .move_to(OrderId(1), Column::Preparing)
        .await
        .unwrap()
        .expect("order exists");

    assert_eq!(revision.current, burger(Column::Preparing));
    assert_eq!(store.puts(), vec![burger(Column::Preparing)]);
    store.verify();
}

#[tokio::test]
async fn test_store_failure_is_reported() {
    let mut store = MockClient::<Order>::new();
    store.expect_create().return_err(FrameworkError::ActorClosed);

    let orders = OrderClient::new(store.client());
    let result = orders
        .create(OrderFields::new("Burger", "12", Column::Ordered))
        .await;

    assert_eq!(
        result,
        Err(OrderError::ActorCommunicationError(
            "Store actor closed".to_string()
        ))
    );
    store.verify();
}

#[tokio::test]
async fn test_drag_target_reports_change() {
    let mut store = MockClient::<Order>::new();
    store.expect_update_session().return_ok(true);
    store.expect_update_session().return_ok(false);

    let orders = OrderClient::new(store.client());
    assert_eq!(orders.set_drag_target(Some(Column::Serving)).await, Ok(true));
    assert_eq!(orders.set_drag_target(Some(Column::Serving)).await, Ok(false));
    store.verify();
}
