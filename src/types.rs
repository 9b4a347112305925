use chrono::Utc;
use serde::Deserialize;

/// A timestamp as MediaWiki reports it, e.g. `2023-07-18T16:26:29Z`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Deserialize)]
pub struct MwTimestamp(#[serde(deserialize_with = "crate::util::dt::deserialize")] pub chrono::DateTime<Utc>);

pub(crate) fn format(time: &chrono::DateTime<Utc>) -> String {
    time.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

impl serde::Serialize for MwTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        format(&self.0).serialize(serializer)
    }
}

impl From<chrono::DateTime<Utc>> for MwTimestamp {
    fn from(x: chrono::DateTime<Utc>) -> Self {
        Self(x)
    }
}
