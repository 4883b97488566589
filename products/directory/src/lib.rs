//! Employee directory slice.
//!
//! A [`Directory`] owns one fetched batch of employees and keeps three views of
//! it in sync: the card grid, the name-filtered subset and the detail overlay.
//! Everything here is render-agnostic; adapters turn a [`PageView`] into HTML,
//! JSON or anything else.

pub mod directory;
pub mod error;
pub mod filter;
pub mod grid;
pub mod overlay;
pub mod store;
pub mod view;

pub use directory::{Directory, Page, RETRY_MESSAGE};
pub use error::{DirectoryError, DirectoryResult};
pub use filter::VisibleSet;
pub use grid::Grid;
pub use overlay::{OverlayAction, OverlayController, OverlayState, Transition};
pub use store::{EmployeeId, EmployeeStore};
pub use view::{CardView, GalleryView, OverlayView, PageView, VisibleCard, format_birth_date};

#[cfg(test)]
pub(crate) mod fixtures {
    use entity::{BirthDate, Employee, Identity, Location, Name, Picture, Street};

    pub fn employee(token: &str, first: &str, last: &str) -> Employee {
        Employee {
            id: Identity {
                name: Some("SSN".into()),
                value: Some(token.into()),
            },
            login: None,
            picture: Picture {
                large: Some(format!("https://img.example/large/{token}.jpg")),
                medium: None,
                thumbnail: format!("https://img.example/thumb/{token}.jpg"),
            },
            name: Name {
                title: Some("Mx".into()),
                first: first.into(),
                last: last.into(),
            },
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            cell: "(555) 010-0000".into(),
            phone: None,
            location: Location {
                street: Street {
                    number: "42".into(),
                    name: "Elm Street".into(),
                },
                city: "Springfield".into(),
                state: "Oregon".into(),
                postcode: "97477".into(),
                country: Some("United States".into()),
            },
            dob: BirthDate {
                date: "1990-05-17T00:00:00.000Z".into(),
                age: Some(35),
            },
        }
    }

    /// Alice, Bob, Carol in that order.
    pub fn abc() -> Vec<Employee> {
        vec![
            employee("a", "Alice", "Smith"),
            employee("b", "Bob", "Jones"),
            employee("c", "Carol", "Smithers"),
        ]
    }
}
