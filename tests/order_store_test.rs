use order_board::clients::OrderClient;
use order_board::model::{Column, DragSession, OrderFields, OrderId};
use order_board::order_actor;
use std::collections::HashSet;
use store_actor::RecordClient;

fn spawn_store() -> OrderClient {
    let (actor, orders) = order_actor::new(32);
    tokio::spawn(actor.run());
    orders
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let orders = spawn_store();

    let first = orders
        .create(OrderFields::new("Burger", "12", Column::Ordered))
        .await
        .unwrap();
    let second = orders
        .create(OrderFields::new("Shake", "3", Column::Serving))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let fetched = orders.get(second.id).await.unwrap().expect("just created");
    assert_eq!(fetched.title, "Shake");
    assert_eq!(fetched.table, "3");
    assert_eq!(fetched.column, Column::Serving);
    assert_eq!(fetched.id, second.id);
}

#[tokio::test]
async fn test_empty_fields_are_accepted() {
    let orders = spawn_store();

    let order = orders
        .create(OrderFields::new("", "", Column::Ordered))
        .await
        .unwrap();

    let fetched = orders.get(order.id).await.unwrap().expect("stored");
    assert!(fetched.title.is_empty());
    assert!(fetched.table.is_empty());
}

#[tokio::test]
async fn test_burger_moves_from_ordered_to_serving() {
    let orders = spawn_store();

    let burger = orders
        .create(OrderFields::new("Burger", "12", Column::Ordered))
        .await
        .unwrap();
    assert_eq!(orders.len().await.unwrap(), 1);
    assert_eq!(burger.column, Column::Ordered);

    let revision = orders
        .update(burger.id, OrderFields::new("Burger", "12", Column::Serving))
        .await
        .unwrap()
        .expect("burger exists");
    assert!(revision.moved());

    let all = orders.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, burger.id);
    assert_eq!(all[0].column, Column::Serving);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let orders = spawn_store();

    let kept = orders
        .create(OrderFields::new("Fries", "4", Column::Ordered))
        .await
        .unwrap();
    let gone = orders
        .create(OrderFields::new("Cola", "4", Column::Ordered))
        .await
        .unwrap();

    assert!(orders.delete(gone.id).await.unwrap());
    let after_once = orders.list().await.unwrap();

    assert!(!orders.delete(gone.id).await.unwrap());
    assert_eq!(orders.list().await.unwrap(), after_once);
    assert_eq!(after_once, vec![kept]);
}

#[tokio::test]
async fn test_delete_of_unknown_id_leaves_size() {
    let orders = spawn_store();
    orders
        .create(OrderFields::new("Fries", "4", Column::Ordered))
        .await
        .unwrap();

    assert!(!orders.delete(OrderId(999)).await.unwrap());
    assert_eq!(orders.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_ids_stay_unique_across_mixed_operations() {
    let orders = spawn_store();
    let mut issued = HashSet::new();

    for round in 0u32..12 {
        let column = Column::ALL[(round % 3) as usize];
        let order = orders
            .create(OrderFields::new(format!("dish {round}"), round.to_string(), column))
            .await
            .unwrap();
        assert!(issued.insert(order.id), "{} issued twice", order.id);

        if round % 2 == 0 {
            let next = Column::ALL[((round + 1) % 3) as usize];
            orders.move_to(order.id, next).await.unwrap();
        }
        if round % 3 == 0 {
            orders.delete(order.id).await.unwrap();
        }
    }

    let all = orders.list().await.unwrap();
    let ids: HashSet<OrderId> = all.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), all.len());
    assert_eq!(all.len(), 8);
    assert!(all.iter().all(|o| Column::ALL.contains(&o.column)));
}

#[tokio::test]
async fn test_drag_session_lifecycle() {
    let orders = spawn_store();
    assert_eq!(orders.drag_session().await.unwrap(), DragSession::default());

    orders.begin_drag(OrderId(1)).await.unwrap();
    assert!(orders.set_drag_target(Some(Column::Preparing)).await.unwrap());
    assert!(!orders.set_drag_target(Some(Column::Preparing)).await.unwrap());

    let session = orders.drag_session().await.unwrap();
    assert_eq!(session.dragging, Some(OrderId(1)));
    assert_eq!(session.over, Some(Column::Preparing));

    orders.end_drag().await.unwrap();
    assert!(!orders.drag_session().await.unwrap().is_active());
}

#[tokio::test]
async fn test_update_racing_a_delete_does_not_restore_the_order() {
    let orders = spawn_store();
    let burger = orders
        .create(OrderFields::new("Burger", "12", Column::Ordered))
        .await
        .unwrap();

    let editor = orders.clone();
    let kitchen = orders.clone();
    let (updated, deleted) = tokio::join!(
        editor.update(burger.id, OrderFields::new("Burger", "12", Column::Serving)),
        kitchen.delete(burger.id),
    );

    assert!(deleted.unwrap());
    // Whichever request ran first, the delete wins in the end.
    let _ = updated.unwrap();
    assert!(orders.get(burger.id).await.unwrap().is_none());
    assert!(orders.is_empty().await.unwrap());
}
