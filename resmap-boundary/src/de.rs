use serde::{de::IgnoredAny, Deserialize, Deserializer};

pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Coordinates are stored as posted, so a number, a numeric
/// string or `null` may show up. Anything else is "absent".
pub fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCoordinate>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawCoordinate::Number(n)) => Some(n),
        Some(RawCoordinate::Text(s)) => s.trim().parse().ok(),
        Some(RawCoordinate::Other(_)) | None => None,
    })
}
