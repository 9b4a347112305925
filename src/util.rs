pub mod dt {
    use std::fmt;

    use chrono::{DateTime, Utc};
    use serde::Deserializer;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        pub struct Visitor;
        impl<'a> serde::de::Visitor<'a> for Visitor {
            type Value = DateTime<Utc>;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.pad("an RFC 3339 timestamp")
            }
            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                DateTime::parse_from_rfc3339(s)
                    .map(|d| d.into())
                    .map_err(|e| E::custom(e))
            }
        }

        d.deserialize_str(Visitor)
    }
}
