//! Serde helpers that keep "absent" apart from "null" in update payloads.
//!
//! Both are used together with `#[serde(default)]`, so a missing key
//! stays `None` and never reaches the deserializer.

use serde::{Deserialize, Deserializer};

/// Present keys must carry a real value; `null` is rejected.
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Present keys become `Some(..)`, so `null` turns into `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
