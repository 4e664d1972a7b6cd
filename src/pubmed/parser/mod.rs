//! PubMed EFetch XML parser
//!
//! Converts an EFetch `PubmedArticleSet` document into [`RecordEntry`] values,
//! one per `PubmedArticle` element, in document order.
//!
//! - `preprocessing` - inline markup removal
//! - `deserializers` - mixed-content text fields
//! - `xml_types` - serde schema types and conversion into [`RawRecord`](crate::pubmed::models::RawRecord)
//! - `recovery` - per-article fallback when the whole set fails to parse

mod deserializers;
mod preprocessing;
mod recovery;
mod xml_types;

pub(crate) use preprocessing::strip_inline_markup;

use crate::error::{MalformedRecord, PapersError, Result};
use crate::pubmed::models::RecordEntry;
use quick_xml::de::{from_str, DeError};
use recovery::{recover_pmid, split_articles};
use tracing::{debug, instrument, warn};
use xml_types::{PubmedArticleSet, PubmedArticleXml};

/// Parse every article in an EFetch XML response
///
/// Articles that lack `MedlineCitation` or `Article` come back as
/// `Err(MalformedRecord)` entries so the caller can skip them. When the set
/// as a whole fails to deserialize, each `<PubmedArticle>` is parsed on its
/// own and the ones that still fail become `Err(MalformedRecord)` too. Only a
/// document with no complete article element is an error.
///
/// # Example
///
/// ```
/// use get_papers_list::pubmed::parse_records_from_xml;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///         <Journal><Title>Example Journal</Title></Journal>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let entries = parse_records_from_xml(xml)?;
/// let record = entries[0].as_ref().unwrap();
/// assert_eq!(record.pmid, "12345678");
/// # Ok::<(), get_papers_list::PapersError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_records_from_xml(xml: &str) -> Result<Vec<RecordEntry>> {
    let cleaned_xml = strip_inline_markup(xml);

    let article_set: PubmedArticleSet = match from_str(&cleaned_xml) {
        Ok(set) => set,
        Err(e) => return parse_articles_individually(&cleaned_xml, e),
    };

    let entries: Vec<RecordEntry> = article_set
        .articles
        .into_iter()
        .map(|article| article.into_entry())
        .collect();

    debug!(articles = entries.len(), "Parsed EFetch article set");

    Ok(entries)
}

fn parse_articles_individually(xml: &str, set_error: DeError) -> Result<Vec<RecordEntry>> {
    let chunks = split_articles(xml);
    if chunks.is_empty() {
        return Err(PapersError::XmlError(format!(
            "Failed to deserialize XML: {}",
            set_error
        )));
    }

    warn!(
        error = %set_error,
        articles = chunks.len(),
        "Article set failed to parse, parsing articles individually"
    );

    Ok(chunks.into_iter().map(parse_single_article).collect())
}

fn parse_single_article(article_xml: &str) -> RecordEntry {
    let wrapped = format!("<PubmedArticleSet>{}</PubmedArticleSet>", article_xml);

    match from_str::<PubmedArticleSet>(&wrapped) {
        Ok(set) => set
            .articles
            .into_iter()
            .next()
            .map(PubmedArticleXml::into_entry)
            .unwrap_or_else(|| {
                Err(MalformedRecord::new(
                    recover_pmid(article_xml),
                    "empty PubmedArticle",
                ))
            }),
        Err(e) => Err(MalformedRecord::new(
            recover_pmid(article_xml),
            format!("unparseable article: {}", e),
        )),
    }
}
