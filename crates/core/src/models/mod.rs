pub mod booking;
pub mod expert;
pub mod slot;

use serde::{Deserialize, Deserializer};

/// Deserializes a PATCH field so that an absent key and an explicit `null`
/// can be told apart: absent stays `None`, `null` becomes `Some(None)`, a
/// value becomes `Some(Some(v))`. Combine with `#[serde(default)]`.
pub fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
