use crate::geo::MapPoint;

pub const DEFAULT_API_URL: &str = "/api";

pub const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Chennai
pub const DEFAULT_MAP_CENTER: MapPoint = MapPoint {
    lat: 13.0827,
    lng: 80.2707,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: &'static str,
    pub tile_layer_url: &'static str,
    pub map_attribution: &'static str,
    pub map_center: MapPoint,
    pub map_zoom: f64,
    /// Zoom level when a single resource is focused.
    pub focus_zoom: f64,
    /// Zoom level after the user has been located.
    pub locate_zoom: f64,
    pub search_debounce_ms: u32,
    /// Look-ahead window of the upcoming events page.
    pub upcoming_event_days: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL,
            tile_layer_url: TILE_LAYER_URL,
            map_attribution: MAP_ATTRIBUTION,
            map_center: DEFAULT_MAP_CENTER,
            map_zoom: 12.0,
            focus_zoom: 15.0,
            locate_zoom: 14.0,
            search_debounce_ms: 300,
            upcoming_event_days: 30,
        }
    }
}
