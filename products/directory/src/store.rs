use std::{borrow::Borrow, collections::HashMap, fmt};

use entity::Employee;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identity token of an employee; doubles as the card's DOM id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EmployeeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ordered, append-only employee collection. Order is provider order.
#[derive(Clone, Debug, Default)]
pub struct EmployeeStore {
    entries: Vec<(EmployeeId, Employee)>,
    index: HashMap<EmployeeId, usize>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return the identity it is stored under.
    ///
    /// Records without a usable token, or whose token is already taken, get a
    /// positional `employee-{n}` identity so every card id stays unique.
    pub fn append(&mut self, employee: Employee) -> EmployeeId {
        let id = match employee.identity_token() {
            Some(token) if !self.index.contains_key(token) => EmployeeId::new(token),
            token => {
                let fallback = self.positional_id();
                warn!(
                    ?token,
                    %fallback,
                    "employee has no unique identity token; using positional id"
                );
                fallback
            }
        };
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id.clone(), employee));
        id
    }

    fn positional_id(&self) -> EmployeeId {
        let mut n = self.entries.len() + 1;
        loop {
            let candidate = EmployeeId::new(format!("employee-{n}"));
            if !self.index.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.position(id).map(|pos| &self.entries[pos].1)
    }

    pub fn position(&self, id: &EmployeeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EmployeeId, &Employee)> {
        self.entries.iter().map(|(id, employee)| (id, employee))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
