use crate::config::BoardConfig;
use crate::model::{Column, Order, OrderFields, OrderId};
use crate::view::{Control, Overlay, View};
use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Display};
use tracing::debug;

/// The visual node for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: OrderId,
    pub title: String,
    pub table: String,
}

/// What a form currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub table: String,
    pub column: Option<Column>,
}

#[derive(Debug, Clone)]
struct Container {
    name: String,
    heading: String,
    cards: Vec<Card>,
}

/// In-memory board: one container per column, overlays, focus and forms.
#[derive(Debug, Clone)]
pub struct BoardView {
    containers: BTreeMap<Column, Container>,
    targeted: Option<Column>,
    open: HashSet<Overlay>,
    focused: Option<Control>,
    add_form: FormState,
    edit_form: FormState,
}

impl BoardView {
    pub fn new(config: &BoardConfig) -> Self {
        let containers = config
            .columns
            .iter()
            .map(|c| {
                (
                    c.column,
                    Container {
                        name: c.container.clone(),
                        heading: c.heading.clone(),
                        cards: Vec::new(),
                    },
                )
            })
            .collect();

        Self {
            containers,
            targeted: None,
            open: HashSet::new(),
            focused: None,
            add_form: FormState::default(),
            edit_form: FormState::default(),
        }
    }

    /// Cards in `column`, in placement order.
    pub fn cards(&self, column: Column) -> &[Card] {
        self.containers
            .get(&column)
            .map(|c| c.cards.as_slice())
            .unwrap_or(&[])
    }

    /// The column whose container holds the card for `id`.
    pub fn column_of(&self, id: &OrderId) -> Option<Column> {
        self.containers
            .iter()
            .find(|(_, c)| c.cards.iter().any(|card| &card.id == id))
            .map(|(column, _)| *column)
    }

    pub fn card_count(&self) -> usize {
        self.containers.values().map(|c| c.cards.len()).sum()
    }

    pub fn container_name(&self, column: Column) -> Option<&str> {
        self.containers.get(&column).map(|c| c.name.as_str())
    }

    pub fn targeted(&self) -> Option<Column> {
        self.targeted
    }

    pub fn focused(&self) -> Option<Control> {
        self.focused
    }

    pub fn form(&self, overlay: Overlay) -> Option<&FormState> {
        match overlay {
            Overlay::Add => Some(&self.add_form),
            Overlay::Edit => Some(&self.edit_form),
            Overlay::Help => None,
        }
    }

    fn form_mut(&mut self, overlay: Overlay) -> Option<&mut FormState> {
        match overlay {
            Overlay::Add => Some(&mut self.add_form),
            Overlay::Edit => Some(&mut self.edit_form),
            Overlay::Help => None,
        }
    }
}

impl View for BoardView {
    type Element = Card;

    fn render(&self, order: &Order) -> Card {
        Card {
            id: order.id,
            title: order.title.clone(),
            table: order.table.clone(),
        }
    }

    fn place(&mut self, element: Card, column: Column) {
        // Containers exist for every configured column; config validation guarantees all.
        if let Some(container) = self.containers.get_mut(&column) {
            debug!(id = %element.id, container = %container.name, "Placing card");
            container.cards.push(element);
        }
    }

    fn remove(&mut self, id: &OrderId) -> bool {
        for container in self.containers.values_mut() {
            if let Some(pos) = container.cards.iter().position(|card| &card.id == id) {
                container.cards.remove(pos);
                return true;
            }
        }
        false
    }

    fn mark_targeted(&mut self, column: Option<Column>) {
        self.targeted = column;
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        self.open.insert(overlay);
    }

    fn hide_overlay(&mut self, overlay: Overlay) {
        self.open.remove(&overlay);
    }

    fn is_open(&self, overlay: Overlay) -> bool {
        self.open.contains(&overlay)
    }

    fn focus(&mut self, control: Control) {
        self.focused = Some(control);
    }

    fn reset_form(&mut self, overlay: Overlay) {
        if let Some(form) = self.form_mut(overlay) {
            *form = FormState::default();
        }
    }

    fn fill_form(&mut self, overlay: Overlay, fields: &OrderFields) {
        if let Some(form) = self.form_mut(overlay) {
            *form = FormState {
                title: fields.title.clone(),
                table: fields.table.clone(),
                column: Some(fields.column),
            };
        }
    }
}

impl Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (column, container) in &self.containers {
            let marker = if self.targeted == Some(*column) { " *" } else { "" };
            writeln!(f, "[{}]{} ({})", container.heading, marker, container.cards.len())?;
            for card in &container.cards {
                writeln!(f, "  {} | {} | table {}", card.id, card.title, card.table)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u32, title: &str, column: Column) -> Order {
        Order::new(OrderId(id), OrderFields::new(title, "1", column))
    }

    #[test]
    fn test_place_and_remove() {
        let mut view = BoardView::new(&BoardConfig::default());
        let burger = order(1, "Burger", Column::Ordered);

        let card = view.render(&burger);
        view.place(card, Column::Ordered);
        assert_eq!(view.column_of(&OrderId(1)), Some(Column::Ordered));
        assert_eq!(view.cards(Column::Ordered)[0].title, "Burger");

        assert!(view.remove(&OrderId(1)));
        assert!(!view.remove(&OrderId(1)));
        assert_eq!(view.card_count(), 0);
    }

    #[test]
    fn test_single_targeted_column() {
        let mut view = BoardView::new(&BoardConfig::default());
        view.mark_targeted(Some(Column::Preparing));
        view.mark_targeted(Some(Column::Serving));
        assert_eq!(view.targeted(), Some(Column::Serving));

        view.mark_targeted(None);
        assert_eq!(view.targeted(), None);
    }

    #[test]
    fn test_forms_fill_and_reset() {
        let mut view = BoardView::new(&BoardConfig::default());
        let fields = OrderFields::new("Fries", "4", Column::Serving);

        view.fill_form(Overlay::Edit, &fields);
        assert_eq!(view.form(Overlay::Edit).unwrap().column, Some(Column::Serving));

        view.reset_form(Overlay::Edit);
        assert_eq!(view.form(Overlay::Edit), Some(&FormState::default()));
        assert!(view.form(Overlay::Help).is_none());
    }

    #[test]
    fn test_display_lists_cards_under_headings() {
        let mut view = BoardView::new(&BoardConfig::default());
        let card = view.render(&order(3, "Shake", Column::Serving));
        view.place(card, Column::Serving);
        view.mark_targeted(Some(Column::Serving));

        let text = view.to_string();
        assert!(text.contains("order_3 | Shake | table 1"));
        assert!(text.contains(" *"));
    }
}
