//! Custom serde deserializers for mixed-content PubMed text fields

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::result;

/// All character data of an element, descending into child elements
///
/// Attributes are ignored. Text nodes are trimmed and joined with a single
/// space, so `Isotope <sup class="x">18</sup>F` reads as `Isotope 18 F`.
struct TextContent(String);

struct TextContentVisitor;

impl<'de> Visitor<'de> for TextContentVisitor {
    type Value = TextContent;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("element text content")
    }

    fn visit_str<E>(self, value: &str) -> result::Result<TextContent, E>
    where
        E: de::Error,
    {
        Ok(TextContent(value.trim().to_string()))
    }

    fn visit_string<E>(self, value: String) -> result::Result<TextContent, E>
    where
        E: de::Error,
    {
        Ok(TextContent(value.trim().to_string()))
    }

    fn visit_unit<E>(self) -> result::Result<TextContent, E>
    where
        E: de::Error,
    {
        Ok(TextContent(String::new()))
    }

    fn visit_map<M>(self, mut map: M) -> result::Result<TextContent, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut text_parts = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.starts_with('@') {
                let _: IgnoredAny = map.next_value()?;
                continue;
            }
            // `$text`, `$value` and child elements all contribute text
            let part: TextContent = map.next_value()?;
            if !part.0.is_empty() {
                text_parts.push(part.0);
            }
        }
        Ok(TextContent(text_parts.join(" ")))
    }
}

impl<'de> Deserialize<'de> for TextContent {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextContentVisitor)
    }
}

/// Deserialize an optional text element that may carry nested markup
///
/// Use with `#[serde(default, deserialize_with = "deserialize_text_content")]`.
pub(super) fn deserialize_text_content<'de, D>(
    deserializer: D,
) -> result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    TextContent::deserialize(deserializer).map(|text| Some(text.0))
}
