//! Render-ready projections of the application state.
//!
//! Nothing in here touches a rendering surface, the frontend
//! turns these into DOM nodes and map markers.

use resmap_boundary::{Event, Resource, Review};

use crate::{
    event,
    geo::{MapPoint, Mappable},
    rating::{format_rating, StarRating},
    timestamp::format_unix_seconds,
};

pub const LOADING_RESOURCES: &str = "Loading resources ...";
pub const FAILED_TO_LOAD_RESOURCES: &str = "Failed to load resources";
pub const NO_RESULTS: &str = "No results";
pub const ANONYMOUS: &str = "Anonymous";
pub const UNTITLED: &str = "Untitled";

fn display_name(resource: &Resource) -> String {
    let name = resource.name.trim();
    if name.is_empty() {
        UNTITLED.to_owned()
    } else {
        name.to_owned()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: Option<String>,
    pub verified: bool,
    pub rating: Option<StarRating>,
    pub position: Option<MapPoint>,
}

impl From<&Resource> for ResourceCard {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id.clone(),
            name: display_name(r),
            category: r.category.clone().unwrap_or_default(),
            address: r.address.clone().filter(|a| !a.trim().is_empty()),
            verified: r.verified,
            rating: StarRating::from_avg(r.avg_rating),
            position: r.position(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Nothing has been fetched yet.
    Loading,
    Failed,
    Empty,
    Cards(Vec<ResourceCard>),
}

impl ListView {
    /// The placeholder text, if there are no cards to show.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_RESOURCES),
            Self::Failed => Some(FAILED_TO_LOAD_RESOURCES),
            Self::Empty => Some(NO_RESULTS),
            Self::Cards(_) => None,
        }
    }
}

#[must_use]
pub fn cards<'a>(resources: impl IntoIterator<Item = &'a Resource>) -> ListView {
    let cards: Vec<_> = resources.into_iter().map(ResourceCard::from).collect();
    if cards.is_empty() {
        ListView::Empty
    } else {
        ListView::Cards(cards)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub id: String,
    pub position: MapPoint,
    pub name: String,
    pub address: String,
    /// Star glyphs with label or empty.
    pub rating: String,
}

/// One marker per resource with a valid position.
#[must_use]
pub fn markers<'a>(resources: impl IntoIterator<Item = &'a Resource>) -> Vec<MarkerView> {
    resources
        .into_iter()
        .filter_map(|r| {
            let position = r.position()?;
            Some(MarkerView {
                id: r.id.clone(),
                position,
                name: display_name(r),
                address: r.address.clone().unwrap_or_default(),
                rating: format_rating(r.avg_rating),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<T> {
    Loading,
    Failed,
    Empty,
    Items(Vec<T>),
}

impl<T> PanelView<T> {
    fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub author: String,
    pub created: String,
    pub rating: StarRating,
    pub comment: String,
}

impl From<&Review> for ReviewView {
    fn from(r: &Review) -> Self {
        let author = r
            .user_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS)
            .to_owned();
        Self {
            author,
            created: format_unix_seconds(r.created_at),
            rating: StarRating::new(r.rating),
            comment: r.comment.clone().unwrap_or_default(),
        }
    }
}

/// Reviews in the order the server returned them.
#[must_use]
pub fn reviews(reviews: &[Review]) -> PanelView<ReviewView> {
    PanelView::from_items(reviews.iter().map(ReviewView::from).collect())
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub title: String,
    pub date: String,
    pub when: String,
    pub description: String,
}

impl From<&Event> for EventView {
    fn from(e: &Event) -> Self {
        Self {
            title: e.title.clone(),
            date: e.date.clone(),
            when: event::when(e),
            description: e.description.clone().unwrap_or_default(),
        }
    }
}

/// Expects events that are already sorted.
#[must_use]
pub fn events(events: &[Event]) -> PanelView<EventView> {
    PanelView::from_items(events.iter().map(EventView::from).collect())
}
