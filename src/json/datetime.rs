//! Purpose: Serialize date-times as `yyyy-MM-dd HH:mm:ss` strings.
//! Exports: `FORMAT`, `format`, `parse`, serde `with`-module functions, `option`.
//! Role: The codec's registered date/time representation; never numeric.
//! Invariants: Output has no timezone suffix and no sub-second precision.

use serde::{Deserialize, Deserializer, Serializer};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{Error, ErrorKind};

pub const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

pub fn format(value: &PrimitiveDateTime) -> Result<String, Error> {
    value.format(FORMAT).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("could not format date-time")
            .with_source(err)
    })
}

pub fn parse(text: &str) -> Result<PrimitiveDateTime, Error> {
    PrimitiveDateTime::parse(text, FORMAT).map_err(|err| {
        Error::new(ErrorKind::Malformed)
            .with_message(format!("could not parse date-time `{text}`"))
            .with_source(err)
    })
}

/// Use as `#[serde(with = "plinth::json::datetime")]`.
pub fn serialize<S>(value: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rendered = value.format(FORMAT).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&rendered)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    PrimitiveDateTime::parse(&text, FORMAT).map_err(serde::de::Error::custom)
}

/// Use as `#[serde(with = "plinth::json::datetime::option")]`.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;

    use super::FORMAT;

    pub fn serialize<S>(
        value: &Option<PrimitiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => {
                let rendered = value.format(FORMAT).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&rendered)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        text.map(|text| {
            PrimitiveDateTime::parse(&text, FORMAT).map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}
