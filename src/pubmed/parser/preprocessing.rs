//! Cleanup applied to EFetch XML before deserialization

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Remove inline formatting tags (`<i>`, `<sup>`, `<sub>`, `<b>`, ...)
///
/// Titles and affiliations occasionally carry markup that quick-xml's serde
/// deserializer would otherwise split into mixed content, dropping text.
pub(crate) fn strip_inline_markup(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold|underline|sc)>")
            .expect("inline tag pattern is valid")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = cleaned.len(),
            "Stripped inline markup from EFetch XML"
        );
    }

    cleaned.into_owned()
}
