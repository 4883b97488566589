use entity::Employee;
use tracing::debug;

use crate::{store::EmployeeStore, view::CardView};

/// Cards in insertion order. Built once per load, never re-rendered.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cards: Vec<CardView>,
}

impl Grid {
    /// Append every record to `store` and a matching card to the grid, in order.
    pub fn render<I>(store: &mut EmployeeStore, records: I) -> Self
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut grid = Self::default();
        for employee in records {
            let card_source = employee.clone();
            let id = store.append(employee);
            debug!(%id, "card rendered");
            grid.cards.push(CardView::new(id, &card_source));
        }
        grid
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::abc;

    #[test]
    fn one_card_per_record_in_order() {
        let mut store = EmployeeStore::new();
        let grid = Grid::render(&mut store, abc());

        assert_eq!(grid.len(), 3);
        assert_eq!(store.len(), 3);
        let card_ids: Vec<_> = grid.cards().iter().map(|c| c.id.clone()).collect();
        let store_ids: Vec<_> = store.iter().map(|(id, _)| id.clone()).collect();
        assert_eq!(card_ids, store_ids);
        assert_eq!(grid.cards()[1].name, "Bob Jones");
    }

    #[test]
    fn empty_batch_renders_nothing() {
        let mut store = EmployeeStore::new();
        let grid = Grid::render(&mut store, Vec::new());
        assert!(grid.is_empty());
        assert!(store.is_empty());
    }
}
