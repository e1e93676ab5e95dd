//! # Order Board Demo
//!
//! Plays a short scripted session against a headless board and prints the result.
//! Pass a TOML file to use a custom column layout.

use order_board::board::UiEvent;
use order_board::config::BoardConfig;
use order_board::drag::{DragOverEvent, Element};
use order_board::lifecycle::{setup_tracing, BoardSystem};
use order_board::model::Column;
use order_board::view::BoardView;
use tracing::{info, info_span, Instrument};

fn column_path(area: &str) -> DragOverEvent {
    DragOverEvent::new(vec![
        Element::new("span.title"),
        Element::new("div.order"),
        Element::new("div.column").with_area(area),
        Element::new("body"),
        Element::new("html"),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };

    let mut system = BoardSystem::start(&config, BoardView::new(&config));
    let board = &mut system.board;

    let span = info_span!("taking_orders");
    let burger = async {
        board.dispatch(UiEvent::AddToggle).await?;
        let burger = board.submit_add("Burger".into(), "12".into()).await?;
        board.dispatch(UiEvent::AddToggle).await?;
        board.submit_add("Fries".into(), "4".into()).await?;
        Ok::<_, order_board::error::BoardError>(burger)
    }
    .instrument(span)
    .await?;

    let span = info_span!("kitchen");
    async {
        board.dispatch(UiEvent::OrderClicked(burger)).await?;
        board
            .dispatch(UiEvent::EditSubmit {
                title: "Burger, no onions".into(),
                table: "12".into(),
                column: Column::Preparing,
            })
            .await?;

        board.dispatch(UiEvent::DragStart(burger)).await?;
        board
            .dispatch(UiEvent::DragOver(column_path(Column::Serving.as_str())))
            .await?;
        board.dispatch(UiEvent::Drop).await?;
        Ok::<_, order_board::error::BoardError>(())
    }
    .instrument(span)
    .await?;

    let orders = board.orders().len().await?;
    info!(orders, "Session finished");
    println!("{}", board.view());

    system.shutdown().await?;
    Ok(())
}
