//! Per-article fallback for EFetch documents that fail to parse as a whole

use std::sync::OnceLock;

use regex::Regex;

const ARTICLE_OPEN: &str = "<PubmedArticle";
const ARTICLE_CLOSE: &str = "</PubmedArticle>";

/// Slice out every complete `<PubmedArticle>...</PubmedArticle>` element
///
/// An opening tag with no matching close ends the scan.
pub(super) fn split_articles(xml: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut offset = 0;

    while let Some(found) = xml[offset..].find(ARTICLE_OPEN) {
        let start = offset + found;
        let name_end = start + ARTICLE_OPEN.len();

        // `<PubmedArticleSet` shares the prefix
        if !xml[name_end..].starts_with(|c: char| c == '>' || c.is_whitespace()) {
            offset = name_end;
            continue;
        }

        let Some(close) = xml[name_end..].find(ARTICLE_CLOSE) else {
            break;
        };
        let end = name_end + close + ARTICLE_CLOSE.len();
        chunks.push(&xml[start..end]);
        offset = end;
    }

    chunks
}

/// Best-effort PMID of an article that could not be deserialized
pub(super) fn recover_pmid(article_xml: &str) -> Option<String> {
    static PMID_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = PMID_REGEX.get_or_init(|| {
        Regex::new(r"<PMID(?:\s[^>]*)?>\s*([^<\s]+)").expect("PMID pattern is valid")
    });

    re.captures(article_xml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
