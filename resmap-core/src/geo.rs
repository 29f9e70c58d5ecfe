use resmap_boundary::Resource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates are finite numbers.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Latitude as written into a form field (6 decimal places).
    #[must_use]
    pub fn lat_field(&self) -> String {
        format!("{:.6}", self.lat)
    }

    /// Longitude as written into a form field (6 decimal places).
    #[must_use]
    pub fn lng_field(&self) -> String {
        format!("{:.6}", self.lng)
    }
}

/// Something that can be pinned on the map.
pub trait Mappable {
    /// `None` if the position is missing or not finite.
    fn position(&self) -> Option<MapPoint>;
}

impl Mappable for Resource {
    fn position(&self) -> Option<MapPoint> {
        let (Some(lat), Some(lng)) = (self.latitude, self.longitude) else {
            return None;
        };
        let point = MapPoint { lat, lng };
        point.is_valid().then_some(point)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: MapPoint,
    pub zoom: f64,
}
