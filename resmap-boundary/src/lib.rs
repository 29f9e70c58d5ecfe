use std::fmt;

use serde::{Deserialize, Serialize};

mod de;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Resource {
    pub id          : String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name        : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address     : Option<String>,
    #[serde(default, deserialize_with = "de::lenient_coordinate", skip_serializing_if = "Option::is_none")]
    pub latitude    : Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_coordinate", skip_serializing_if = "Option::is_none")]
    pub longitude   : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description : Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub verified    : bool,
    #[serde(default)]
    pub avg_rating  : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at  : Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewResource {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewReview {
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub title: String,
    /// ISO 8601 date, e.g. `2024-03-01`.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of a successful mutation, e.g. `{"message":"Resource added","id":"..."}`.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Error payload of a non-2xx response.
///
/// The backend is not consistent about the key, so both
/// `{"error": ..}` and `{"message": ..}` are accepted.
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Clone, PartialEq))]
pub struct Error {
    #[serde(skip)]
    pub http_status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Error {
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{reason} (HTTP {})", self.http_status),
            None => write!(f, "HTTP {}", self.http_status),
        }
    }
}

impl std::error::Error for Error {}
