use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer that treats an explicit `null` like an absent field
///
/// Pair with `#[serde(default)]` so both `{"x": null}` and `{}` yield `T::default()`.
/// Values of the wrong type are still rejected.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Custom deserializer for optional, display-only fields
///
/// Absent, `null` and wrongly typed values all become `None`, so an odd value in
/// one of these fields never makes the surrounding record undecodable.
pub fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| T::deserialize(v).ok()))
}
