//! Serde adapter for optional durations authored as seconds.
//!
//! Content files write cooldowns and effect lengths as plain numbers
//! (`cooldown: Some(30.0)`), not as `{ secs, nanos }` records.
//!
//! ```ignore
//! #[serde(default, with = "usable_core::duration_secs")]
//! pub cooldown: Option<Duration>,
//! ```

use core::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.map(|d| d.as_secs_f64()).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(secs) => Duration::try_from_secs_f64(secs)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid duration: {secs} seconds"))),
    }
}
