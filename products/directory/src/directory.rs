use std::fmt::Display;

use entity::Employee;
use tracing::{error, info};

use crate::{
    error::{DirectoryError, DirectoryResult},
    filter::VisibleSet,
    grid::Grid,
    overlay::{OverlayAction, OverlayController, Transition},
    store::{EmployeeId, EmployeeStore},
    view::{GalleryView, OverlayView, PageView, VisibleCard},
};

/// Shown in place of the grid when the batch could not be loaded.
pub const RETRY_MESSAGE: &str = "Please give it a new try in a few seconds...";

/// One page session over a fetched batch.
#[derive(Clone, Debug, Default)]
pub struct Directory {
    store: EmployeeStore,
    grid: Grid,
    visible: VisibleSet,
    overlay: OverlayController,
}

impl Directory {
    pub fn load<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut store = EmployeeStore::new();
        let grid = Grid::render(&mut store, records);
        let visible = VisibleSet::all(&store);
        info!(cards = grid.len(), "employee grid rendered");
        Self {
            store,
            grid,
            visible,
            overlay: OverlayController::default(),
        }
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    pub fn query(&self) -> &str {
        self.visible.query()
    }

    pub fn visible_ids(&self) -> Vec<EmployeeId> {
        self.visible
            .visible_ids(&self.store)
            .map(|(_, id)| id.clone())
            .collect()
    }

    /// Apply a name filter; returns the number of visible cards.
    pub fn search(&mut self, query: &str) -> usize {
        let shown = self.visible.apply(&self.store, query);
        info!(query, shown, total = self.store.len(), "filter applied");
        shown
    }

    pub fn open(&mut self, id: &EmployeeId) -> DirectoryResult<()> {
        self.overlay.open_for(&self.store, &self.visible, id)
    }

    pub fn dispatch(&mut self, action: OverlayAction) -> DirectoryResult<Transition> {
        self.overlay.dispatch(&self.store, &self.visible, action)
    }

    pub fn view(&self) -> PageView {
        let cards = self
            .grid
            .cards()
            .iter()
            .enumerate()
            .map(|(pos, card)| VisibleCard {
                card: card.clone(),
                visible: self.visible.is_visible_at(pos),
            })
            .collect();

        let overlay = self.overlay.current().and_then(|id| {
            let employee = self.store.get(id)?;
            let (has_prev, has_next) = self.overlay.neighbours(&self.store, &self.visible);
            Some(OverlayView::new(id.clone(), employee, has_prev, has_next))
        });

        PageView {
            query: self.visible.query().to_string(),
            gallery: GalleryView::Loaded { cards },
            overlay,
        }
    }
}

/// The page as the browser sees it: either the whole batch or the retry message.
#[derive(Clone, Debug)]
pub enum Page {
    Loaded(Directory),
    Failed { reason: String },
}

impl Page {
    /// Top-level orchestration of a fetch outcome. Nothing is rendered on failure.
    pub fn from_fetch<E: Display>(outcome: Result<Vec<Employee>, E>) -> Self {
        match outcome {
            Ok(records) => Page::Loaded(Directory::load(records)),
            Err(err) => {
                error!(error = %err, "failed to load employees");
                Page::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn directory_mut(&mut self) -> DirectoryResult<&mut Directory> {
        match self {
            Page::Loaded(directory) => Ok(directory),
            Page::Failed { .. } => Err(DirectoryError::Unavailable),
        }
    }

    pub fn view(&self) -> PageView {
        match self {
            Page::Loaded(directory) => directory.view(),
            Page::Failed { .. } => PageView {
                query: String::new(),
                gallery: GalleryView::Failed {
                    message: RETRY_MESSAGE.to_string(),
                },
                overlay: None,
            },
        }
    }
}
