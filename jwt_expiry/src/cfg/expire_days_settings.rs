use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

pub const ACCESS_TOKEN_KEY: &str = "jwt.expire-days.access-token";
pub const REFRESH_TOKEN_KEY: &str = "jwt.expire-days.refresh-token";

/// Raw day counts bound from the `jwt.expire-days` section.
///
/// Both keys are required. Values are not checked here; see `core::TokenExpiry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExpireDaysSettings {
    #[serde(deserialize_with = "deserialize_whole_days")]
    pub access_token: i64,

    #[serde(deserialize_with = "deserialize_whole_days")]
    pub refresh_token: i64,
}

/// Accepts integers and integer strings only.
///
/// The `config` crate would otherwise round floats and turn booleans into 0/1.
fn deserialize_whole_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct WholeDays;

    impl<'de> Visitor<'de> for WholeDays {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer number of days")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            self.visit_str(&value)
        }
    }

    deserializer.deserialize_any(WholeDays)
}
