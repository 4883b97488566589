//! Detail overlay state machine.
//!
//! `Closed -> Open(id)` via [`OverlayController::open_for`]; every control
//! click is an [`OverlayAction`]. Prev/next neighbours are looked up in the
//! visible subset as it stands at the moment of the click, so navigation never
//! lands on a card the filter has hidden.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{DirectoryError, DirectoryResult},
    filter::VisibleSet,
    store::{EmployeeId, EmployeeStore},
};

/// Control clicked inside the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayAction {
    Close,
    Prev,
    Next,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(EmployeeId),
}

/// Outcome of a dispatched [`OverlayAction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Closed,
    Moved(EmployeeId),
    /// Bounded at either end of the visible subset.
    Unchanged,
}

#[derive(Clone, Debug, Default)]
pub struct OverlayController {
    state: OverlayState,
}

impl OverlayController {
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn current(&self) -> Option<&EmployeeId> {
        match &self.state {
            OverlayState::Open(id) => Some(id),
            OverlayState::Closed => None,
        }
    }

    /// Open the overlay for a clicked card.
    ///
    /// Only a visible card can be clicked, and only while no overlay is open.
    pub fn open_for(
        &mut self,
        store: &EmployeeStore,
        visible: &VisibleSet,
        id: &EmployeeId,
    ) -> DirectoryResult<()> {
        if let OverlayState::Open(current) = &self.state {
            return Err(DirectoryError::OverlayAlreadyOpen(current.clone()));
        }
        if !store.contains(id) {
            return Err(DirectoryError::UnknownEmployee(id.clone()));
        }
        if !visible.contains(store, id) {
            return Err(DirectoryError::EmployeeHidden(id.clone()));
        }
        debug!(%id, "overlay opened");
        self.state = OverlayState::Open(id.clone());
        Ok(())
    }

    pub fn dispatch(
        &mut self,
        store: &EmployeeStore,
        visible: &VisibleSet,
        action: OverlayAction,
    ) -> DirectoryResult<Transition> {
        let OverlayState::Open(current) = &self.state else {
            return Err(DirectoryError::OverlayClosed);
        };

        let target = match action {
            OverlayAction::Close => {
                debug!(id = %current, "overlay closed");
                self.state = OverlayState::Closed;
                return Ok(Transition::Closed);
            }
            OverlayAction::Prev => predecessor(store, visible, current),
            OverlayAction::Next => successor(store, visible, current),
        };

        Ok(match target {
            Some(next) => {
                debug!(from = %current, to = %next, ?action, "overlay moved");
                self.state = OverlayState::Open(next.clone());
                Transition::Moved(next)
            }
            None => Transition::Unchanged,
        })
    }

    /// Whether prev/next would move, for rendering the controls.
    pub fn neighbours(&self, store: &EmployeeStore, visible: &VisibleSet) -> (bool, bool) {
        match &self.state {
            OverlayState::Open(current) => (
                predecessor(store, visible, current).is_some(),
                successor(store, visible, current).is_some(),
            ),
            OverlayState::Closed => (false, false),
        }
    }
}

/// Closest visible employee before `current` in grid order.
pub fn predecessor(
    store: &EmployeeStore,
    visible: &VisibleSet,
    current: &EmployeeId,
) -> Option<EmployeeId> {
    let anchor = store.position(current)?;
    visible
        .visible_ids(store)
        .take_while(|(pos, _)| *pos < anchor)
        .last()
        .map(|(_, id)| id.clone())
}

/// Closest visible employee after `current` in grid order.
pub fn successor(
    store: &EmployeeStore,
    visible: &VisibleSet,
    current: &EmployeeId,
) -> Option<EmployeeId> {
    let anchor = store.position(current)?;
    visible
        .visible_ids(store)
        .find(|(pos, _)| *pos > anchor)
        .map(|(_, id)| id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{abc, employee};

    fn setup() -> (EmployeeStore, VisibleSet) {
        let mut store = EmployeeStore::new();
        for record in abc() {
            store.append(record);
        }
        let visible = VisibleSet::all(&store);
        (store, visible)
    }

    #[test]
    fn prev_and_next_are_bounded() {
        let (store, visible) = setup();
        let mut overlay = OverlayController::default();
        overlay.open_for(&store, &visible, &"b".into()).unwrap();

        let moved = overlay.dispatch(&store, &visible, OverlayAction::Prev).unwrap();
        assert_eq!(moved, Transition::Moved("a".into()));
        let stay = overlay.dispatch(&store, &visible, OverlayAction::Prev).unwrap();
        assert_eq!(stay, Transition::Unchanged);
        assert_eq!(overlay.current(), Some(&EmployeeId::from("a")));

        overlay.dispatch(&store, &visible, OverlayAction::Next).unwrap();
        overlay.dispatch(&store, &visible, OverlayAction::Next).unwrap();
        let stay = overlay.dispatch(&store, &visible, OverlayAction::Next).unwrap();
        assert_eq!(stay, Transition::Unchanged);
        assert_eq!(overlay.current(), Some(&EmployeeId::from("c")));
    }

    #[test]
    fn navigation_skips_hidden_cards() {
        let (store, mut visible) = setup();
        visible.apply(&store, "smith");
        let mut overlay = OverlayController::default();
        overlay.open_for(&store, &visible, &"a".into()).unwrap();

        let moved = overlay.dispatch(&store, &visible, OverlayAction::Next).unwrap();
        assert_eq!(moved, Transition::Moved("c".into()));
        let moved = overlay.dispatch(&store, &visible, OverlayAction::Prev).unwrap();
        assert_eq!(moved, Transition::Moved("a".into()));
    }

    #[test]
    fn visibility_is_read_at_click_time() {
        let (store, mut visible) = setup();
        let mut overlay = OverlayController::default();
        overlay.open_for(&store, &visible, &"a".into()).unwrap();

        visible.apply(&store, "carol");
        let moved = overlay.dispatch(&store, &visible, OverlayAction::Next).unwrap();
        assert_eq!(moved, Transition::Moved("c".into()));
    }

    #[test]
    fn close_returns_to_closed() {
        let (store, visible) = setup();
        let mut overlay = OverlayController::default();
        overlay.open_for(&store, &visible, &"c".into()).unwrap();
        assert_eq!(
            overlay.dispatch(&store, &visible, OverlayAction::Close),
            Ok(Transition::Closed)
        );
        assert_eq!(overlay.state(), &OverlayState::Closed);
        assert_eq!(
            overlay.dispatch(&store, &visible, OverlayAction::Next),
            Err(DirectoryError::OverlayClosed)
        );
    }

    #[test]
    fn second_open_is_rejected() {
        let (store, visible) = setup();
        let mut overlay = OverlayController::default();
        overlay.open_for(&store, &visible, &"a".into()).unwrap();
        assert_eq!(
            overlay.open_for(&store, &visible, &"b".into()),
            Err(DirectoryError::OverlayAlreadyOpen("a".into()))
        );
        assert_eq!(overlay.current(), Some(&EmployeeId::from("a")));
    }

    #[test]
    fn hidden_or_unknown_cards_cannot_be_opened() {
        let (store, mut visible) = setup();
        visible.apply(&store, "alice");
        let mut overlay = OverlayController::default();
        assert_eq!(
            overlay.open_for(&store, &visible, &"b".into()),
            Err(DirectoryError::EmployeeHidden("b".into()))
        );
        assert_eq!(
            overlay.open_for(&store, &visible, &"zz".into()),
            Err(DirectoryError::UnknownEmployee("zz".into()))
        );
        assert_eq!(overlay.state(), &OverlayState::Closed);
    }

    #[test]
    fn single_visible_card_has_no_neighbours() {
        let mut store = EmployeeStore::new();
        store.append(employee("solo", "Solo", "Only"));
        let visible = VisibleSet::all(&store);
        let mut overlay = OverlayController::default();
        overlay.open_for(&store, &visible, &"solo".into()).unwrap();
        assert_eq!(overlay.neighbours(&store, &visible), (false, false));
        assert_eq!(
            overlay.dispatch(&store, &visible, OverlayAction::Next),
            Ok(Transition::Unchanged)
        );
    }
}
