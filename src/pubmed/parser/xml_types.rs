//! Serde shapes for the subset of the PubMed EFetch schema the extractor reads
//!
//! Every nested element is optional so that a single malformed article does
//! not fail deserialization of the whole set; structural gaps are reported
//! per article by [`PubmedArticleXml::into_entry`].

use serde::Deserialize;

use super::deserializers::deserialize_text_content;
use crate::error::MalformedRecord;
use crate::pubmed::models::{DateFragment, RawAuthor, RawRecord, RecordEntry};

#[derive(Debug, Deserialize)]
#[serde(rename = "PubmedArticleSet")]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    medline_citation: Option<MedlineCitation>,
}

impl PubmedArticleXml {
    pub(super) fn into_entry(self) -> RecordEntry {
        let medline = self
            .medline_citation
            .ok_or_else(|| MalformedRecord::new(None, "missing MedlineCitation"))?;

        let pmid = medline.pmid.map(|p| p.value.trim().to_string());

        let article = medline
            .article
            .ok_or_else(|| MalformedRecord::new(pmid.clone(), "missing Article"))?;

        let (journal, pub_date) = match article.journal {
            Some(journal) => (
                journal.title,
                journal
                    .journal_issue
                    .and_then(|issue| issue.pub_date)
                    .map(PubDateXml::into_fragment),
            ),
            None => (None, None),
        };

        let authors = article
            .author_list
            .map(|list| list.authors.into_iter().map(AuthorXml::into_author).collect())
            .unwrap_or_default();

        Ok(RawRecord {
            pmid: pmid.unwrap_or_default(),
            title: article.article_title,
            journal,
            pub_date,
            authors,
        })
    }
}

#[derive(Debug, Deserialize)]
struct MedlineCitation {
    #[serde(rename = "PMID")]
    pmid: Option<PmidXml>,
    #[serde(rename = "Article")]
    article: Option<Article>,
}

#[derive(Debug, Deserialize)]
struct PmidXml {
    #[serde(rename = "$text")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(rename = "Journal")]
    journal: Option<Journal>,
    #[serde(rename = "ArticleTitle", default, deserialize_with = "deserialize_text_content")]
    article_title: Option<String>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorList>,
}

#[derive(Debug, Deserialize)]
struct Journal {
    #[serde(rename = "Title", default, deserialize_with = "deserialize_text_content")]
    title: Option<String>,
    #[serde(rename = "JournalIssue")]
    journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Deserialize)]
struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub_date: Option<PubDateXml>,
}

#[derive(Debug, Deserialize)]
struct PubDateXml {
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Month")]
    month: Option<String>,
    #[serde(rename = "Day")]
    day: Option<String>,
}

impl PubDateXml {
    fn into_fragment(self) -> DateFragment {
        DateFragment {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthorList {
    #[serde(rename = "Author", default)]
    authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
struct AuthorXml {
    #[serde(rename = "LastName")]
    last_name: Option<String>,
    #[serde(rename = "ForeName")]
    fore_name: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    affiliation_info: Vec<AffiliationInfo>,
}

impl AuthorXml {
    fn into_author(self) -> RawAuthor {
        RawAuthor {
            fore_name: self.fore_name,
            last_name: self.last_name,
            affiliation: self
                .affiliation_info
                .into_iter()
                .next()
                .map(|info| info.affiliation.unwrap_or_default()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AffiliationInfo {
    #[serde(rename = "Affiliation", default, deserialize_with = "deserialize_text_content")]
    affiliation: Option<String>,
}
