//! Text fields that YAML or the environment may type as integers.
//!
//! `zt_network_id: 1234567890123456` arrives as an unsigned int, and so does
//! `ZTI_CONTROLLER__NETWORK_ID=1234567890123456`. Both are read back as text.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Width of a network id in hex digits.
const NETWORK_ID_WIDTH: usize = 16;

/// A string, or an integer rendered as text zero-padded to `WIDTH` digits.
struct Text<const WIDTH: usize>(String);

struct TextVisitor<const WIDTH: usize>;

impl<'de, const WIDTH: usize> Visitor<'de> for TextVisitor<WIDTH> {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string or an integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let width = WIDTH;
        Ok(format!("{value:0width$}"))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Ok(value.to_string()),
        }
    }
}

impl<'de, const WIDTH: usize> Deserialize<'de> for Text<WIDTH> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(TextVisitor::<WIDTH>)
            .map(Text)
    }
}

/// API tokens and other free text.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Text::<0>::deserialize(deserializer).map(|text| text.0)
}

pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Text<0>>::deserialize(deserializer)?.map(|text| text.0))
}

/// Network ids; integers regain the leading zeros YAML strips.
pub(crate) fn network_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Text::<NETWORK_ID_WIDTH>::deserialize(deserializer).map(|text| text.0)
}

pub(crate) fn optional_network_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Text<NETWORK_ID_WIDTH>>::deserialize(deserializer)?.map(|text| text.0))
}
