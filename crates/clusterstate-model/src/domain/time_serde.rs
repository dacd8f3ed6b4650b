//! Optional timestamps on the wire as whole seconds since the Unix epoch.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn serialize<S>(time: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let secs = match time {
        Some(t) => Some(
            t.duration_since(UNIX_EPOCH)
                .map_err(serde::ser::Error::custom)?
                .as_secs(),
        ),
        None => None,
    };
    secs.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SystemTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<u64>::deserialize(deserializer)? {
        Some(secs) => UNIX_EPOCH
            .checked_add(Duration::from_secs(secs))
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}"))),
        None => Ok(None),
    }
}
