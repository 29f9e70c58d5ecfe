//! Form state of the dialogs and the presence checks
//! that run before anything is sent to the backend.

use thiserror::Error;

use resmap_boundary::{NewEvent, NewResource, NewReview};

use crate::geo::MapPoint;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter name, latitude and longitude")]
    MissingResourceFields,
    #[error("Please choose a rating")]
    MissingRating,
    #[error("Please enter a title and a date")]
    MissingEventFields,
    #[error("Please open the reviews of a resource first")]
    NoResourceForReview,
    #[error("Please open the events of a resource first")]
    NoResourceForEvent,
}

fn optional(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

/// A number as typed into a field.
///
/// There is no type validation beyond the coercion: text that is
/// not a number ends up as NaN, which is encoded as `null`.
fn coerce_number(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceField {
    Name,
    Category,
    Address,
    Latitude,
    Longitude,
    Contact,
    Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceForm {
    pub name: String,
    pub category: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub contact: String,
    pub description: String,
}

impl ResourceForm {
    pub fn set(&mut self, field: ResourceField, value: String) {
        let target = match field {
            ResourceField::Name => &mut self.name,
            ResourceField::Category => &mut self.category,
            ResourceField::Address => &mut self.address,
            ResourceField::Latitude => &mut self.latitude,
            ResourceField::Longitude => &mut self.longitude,
            ResourceField::Contact => &mut self.contact,
            ResourceField::Description => &mut self.description,
        };
        *target = value;
    }

    #[must_use]
    pub fn get(&self, field: ResourceField) -> &str {
        match field {
            ResourceField::Name => &self.name,
            ResourceField::Category => &self.category,
            ResourceField::Address => &self.address,
            ResourceField::Latitude => &self.latitude,
            ResourceField::Longitude => &self.longitude,
            ResourceField::Contact => &self.contact,
            ResourceField::Description => &self.description,
        }
    }

    pub fn set_position(&mut self, point: MapPoint) {
        self.latitude = point.lat_field();
        self.longitude = point.lng_field();
    }

    pub fn to_new_resource(&self) -> Result<NewResource, FormError> {
        let Self {
            name,
            category,
            address,
            latitude,
            longitude,
            contact,
            description,
        } = self;
        if name.trim().is_empty() || latitude.trim().is_empty() || longitude.trim().is_empty() {
            return Err(FormError::MissingResourceFields);
        }
        Ok(NewResource {
            name: name.trim().to_owned(),
            category: optional(category),
            address: optional(address),
            latitude: coerce_number(latitude),
            longitude: coerce_number(longitude),
            contact: optional(contact),
            description: optional(description),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    Rating,
    Comment,
    UserName,
}

pub const DEFAULT_REVIEW_RATING: &str = "5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub rating: String,
    pub comment: String,
    pub user_name: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            rating: DEFAULT_REVIEW_RATING.to_owned(),
            comment: String::new(),
            user_name: String::new(),
        }
    }
}

impl ReviewForm {
    pub fn set(&mut self, field: ReviewField, value: String) {
        match field {
            ReviewField::Rating => self.rating = value,
            ReviewField::Comment => self.comment = value,
            ReviewField::UserName => self.user_name = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ReviewField) -> &str {
        match field {
            ReviewField::Rating => &self.rating,
            ReviewField::Comment => &self.comment,
            ReviewField::UserName => &self.user_name,
        }
    }

    pub fn to_new_review(&self) -> Result<NewReview, FormError> {
        if self.rating.trim().is_empty() {
            return Err(FormError::MissingRating);
        }
        Ok(NewReview {
            rating: coerce_number(&self.rating),
            comment: optional(&self.comment),
            user_name: optional(&self.user_name),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Title,
    Date,
    Time,
    Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
}

impl EventForm {
    pub fn set(&mut self, field: EventField, value: String) {
        match field {
            EventField::Title => self.title = value,
            EventField::Date => self.date = value,
            EventField::Time => self.time = value,
            EventField::Description => self.description = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Title => &self.title,
            EventField::Date => &self.date,
            EventField::Time => &self.time,
            EventField::Description => &self.description,
        }
    }

    pub fn to_new_event(&self) -> Result<NewEvent, FormError> {
        let title = self.title.trim();
        let date = self.date.trim();
        if title.is_empty() || date.is_empty() {
            return Err(FormError::MissingEventFields);
        }
        Ok(NewEvent {
            title: title.to_owned(),
            date: date.to_owned(),
            time: optional(&self.time),
            description: optional(&self.description),
        })
    }
}

/// The shared admin secret as typed into the prompt.
///
/// It is never stored beyond the single request it was entered for.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    /// `None` if the prompt was dismissed or left blank.
    #[must_use]
    pub fn from_prompt(input: Option<String>) -> Option<Self> {
        input
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminToken(***)")
    }
}
