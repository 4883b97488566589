use crate::store::{EmployeeId, EmployeeStore};

/// Which employees pass the active name filter, aligned with store order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSet {
    mask: Vec<bool>,
    query: String,
}

impl VisibleSet {
    /// Everyone visible, as after a fresh load.
    pub fn all(store: &EmployeeStore) -> Self {
        Self {
            mask: vec![true; store.len()],
            query: String::new(),
        }
    }

    /// Recompute visibility for every employee from scratch.
    ///
    /// Returns how many employees remain visible.
    pub fn apply(&mut self, store: &EmployeeStore, query: &str) -> usize {
        let needle = query.to_lowercase();
        self.mask = store
            .iter()
            .map(|(_, employee)| name_matches(&employee.display_name(), &needle))
            .collect();
        self.query = query.to_string();
        self.visible_count()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_visible_at(&self, position: usize) -> bool {
        self.mask.get(position).copied().unwrap_or(false)
    }

    pub fn contains(&self, store: &EmployeeStore, id: &EmployeeId) -> bool {
        store
            .position(id)
            .is_some_and(|pos| self.is_visible_at(pos))
    }

    pub fn visible_count(&self) -> usize {
        self.mask.iter().filter(|visible| **visible).count()
    }

    /// Visible identities in grid order.
    pub fn visible_ids<'a>(
        &'a self,
        store: &'a EmployeeStore,
    ) -> impl Iterator<Item = (usize, &'a EmployeeId)> + 'a {
        store
            .iter()
            .enumerate()
            .filter(move |(pos, _)| self.is_visible_at(*pos))
            .map(|(pos, (id, _))| (pos, id))
    }
}

/// Case-insensitive substring test; `needle` must already be lowercase.
fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}
