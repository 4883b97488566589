//! Render-agnostic view-models.

use chrono::NaiveDate;
use entity::Employee;
use serde::Serialize;

use crate::store::EmployeeId;

/// Compact grid representation of one employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    /// "city, state"
    pub location: String,
    pub thumbnail: String,
}

impl CardView {
    pub fn new(id: EmployeeId, employee: &Employee) -> Self {
        Self {
            id,
            name: employee.display_name(),
            email: employee.email.clone(),
            location: format!("{}, {}", employee.location.city, employee.location.state),
            thumbnail: employee.picture.thumbnail.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisibleCard {
    #[serde(flatten)]
    pub card: CardView,
    pub visible: bool,
}

/// Detail view of the selected employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub id: EmployeeId,
    pub picture: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub cell: String,
    /// "number street, state, postcode"
    pub address: String,
    pub postcode: String,
    pub state: String,
    /// DD-MM-YYYY
    pub birth_date: String,
    pub has_prev: bool,
    pub has_next: bool,
}

impl OverlayView {
    pub fn new(id: EmployeeId, employee: &Employee, has_prev: bool, has_next: bool) -> Self {
        let location = &employee.location;
        Self {
            id,
            picture: employee.picture.best().to_string(),
            name: employee.display_name(),
            email: employee.email.clone(),
            city: location.city.clone(),
            cell: employee.cell.clone(),
            address: format!(
                "{} {}, {}, {}",
                location.street.number, location.street.name, location.state, location.postcode
            ),
            postcode: location.postcode.clone(),
            state: location.state.clone(),
            birth_date: format_birth_date(&employee.dob.date),
            has_prev,
            has_next,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GalleryView {
    Loaded { cards: Vec<VisibleCard> },
    Failed { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub query: String,
    pub gallery: GalleryView,
    pub overlay: Option<OverlayView>,
}

impl PageView {
    pub fn visible_cards(&self) -> impl Iterator<Item = &CardView> {
        let cards: &[VisibleCard] = match &self.gallery {
            GalleryView::Loaded { cards } => cards.as_slice(),
            GalleryView::Failed { .. } => &[],
        };
        cards.iter().filter(|c| c.visible).map(|c| &c.card)
    }
}

/// Reformat the `YYYY-MM-DD` prefix of a provider timestamp as `DD-MM-YYYY`.
///
/// Anything that does not parse as a calendar date is returned as the raw
/// prefix before `T`.
pub fn format_birth_date(timestamp: &str) -> String {
    let prefix = timestamp.split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        .map(|date| date.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|_| prefix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::employee;

    #[test]
    fn birth_date_is_day_month_year() {
        assert_eq!(format_birth_date("1990-05-17T00:00:00.000Z"), "17-05-1990");
        assert_eq!(format_birth_date("2001-12-03"), "03-12-2001");
    }

    #[test]
    fn unparseable_birth_date_is_shown_verbatim() {
        assert_eq!(format_birth_date("unknownT00:00"), "unknown");
        assert_eq!(format_birth_date(""), "");
    }

    #[test]
    fn card_shows_city_and_state() {
        let card = CardView::new("a".into(), &employee("a", "Alice", "Smith"));
        assert_eq!(card.name, "Alice Smith");
        assert_eq!(card.location, "Springfield, Oregon");
        assert_eq!(card.thumbnail, "https://img.example/thumb/a.jpg");
    }

    #[test]
    fn overlay_carries_full_details() {
        let view = OverlayView::new("a".into(), &employee("a", "Alice", "Smith"), false, true);
        assert_eq!(view.picture, "https://img.example/large/a.jpg");
        assert_eq!(view.address, "42 Elm Street, Oregon, 97477");
        assert_eq!(view.birth_date, "17-05-1990");
        assert_eq!(view.cell, "(555) 010-0000");
    }

    #[test]
    fn gallery_serializes_with_status_tag() {
        let failed = GalleryView::Failed {
            message: "retry".into(),
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["message"], "retry");
    }
}
