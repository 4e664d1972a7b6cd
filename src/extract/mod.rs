//! Industry-affiliation extraction
//!
//! Turns [`RawRecord`]s into [`FilteredRecord`]s, keeping only records with at
//! least one author whose affiliation the [`AffiliationClassifier`] marks as
//! commercial.
//!
//! - `affiliation` - corporate-token classifier
//! - `email` - ordered email-location strategies
//! - `date` - partial-date normalization

mod affiliation;
mod date;
mod email;

pub use affiliation::{AffiliationClassifier, DEFAULT_COMPANY_KEYWORDS};
pub use date::{DateNormalizer, MONTH_ABBREVIATIONS};
pub use email::{EmailExtractor, EmailStrategy, PatternMatch, TokenScan};

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::pubmed::models::{RawRecord, RecordEntry};

const DEFAULT_TITLE: &str = "No Title";
const DEFAULT_JOURNAL: &str = "Unknown Journal";
const LIST_SEPARATOR: &str = "; ";

/// A record with at least one commercially affiliated author
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilteredRecord {
    #[serde(rename = "PubmedID")]
    pub pmid: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Journal")]
    pub journal: String,
    /// `YYYY-MM-DD`, or empty when the record has no year
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Qualifying author names joined by `"; "`
    #[serde(rename = "Non-academicAuthor(s)")]
    pub non_academic_authors: String,
    /// Affiliations of every qualifying author, joined by `"; "`
    #[serde(rename = "CompanyAffiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl FilteredRecord {
    /// Field values in export column order
    pub fn as_row(&self) -> [&str; 7] {
        [
            self.pmid.as_str(),
            self.title.as_str(),
            self.journal.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_email.as_str(),
        ]
    }
}

/// Classification rules shared by every batch
#[derive(Debug, Default)]
pub struct RecordExtractor {
    classifier: AffiliationClassifier,
    emails: EmailExtractor,
    dates: DateNormalizer,
}

impl RecordExtractor {
    pub fn new(
        classifier: AffiliationClassifier,
        emails: EmailExtractor,
        dates: DateNormalizer,
    ) -> Self {
        Self {
            classifier,
            emails,
            dates,
        }
    }

    /// Start a batch with an empty set of seen identifiers
    pub fn batch(&self) -> BatchExtractor<'_> {
        BatchExtractor {
            rules: self,
            seen: HashSet::new(),
        }
    }

    /// Run one batch over `entries` in order
    ///
    /// Malformed entries are logged and skipped; they never stop the batch.
    pub fn extract_all<I>(&self, entries: I) -> Vec<FilteredRecord>
    where
        I: IntoIterator<Item = RecordEntry>,
    {
        let mut batch = self.batch();

        entries
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(record) => batch.extract(&record),
                Err(malformed) => {
                    warn!(
                        pmid = malformed.pmid.as_deref().unwrap_or(""),
                        error = %malformed,
                        "Skipped invalid paper entry"
                    );
                    None
                }
            })
            .collect()
    }

    fn build(&self, record: &RawRecord) -> Option<FilteredRecord> {
        let mut authors = Vec::new();
        let mut affiliations = Vec::new();
        let mut email = String::new();

        for author in &record.authors {
            let Some(affiliation) = author.affiliation.as_deref() else {
                continue;
            };
            if !self.classifier.is_commercial(affiliation) {
                continue;
            }

            let full_name = author.full_name();
            if !full_name.is_empty() {
                authors.push(full_name);
            }
            affiliations.push(affiliation);

            if email.is_empty() {
                email = self.emails.extract(affiliation);
            }
        }

        if authors.is_empty() {
            return None;
        }

        let publication_date = record.pub_date.as_ref().map_or(String::new(), |date| {
            self.dates.normalize(
                date.year.as_deref().unwrap_or_default(),
                date.month.as_deref().unwrap_or_default(),
                date.day.as_deref().unwrap_or_default(),
            )
        });

        Some(FilteredRecord {
            pmid: record.pmid.clone(),
            title: record
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            journal: record
                .journal
                .clone()
                .unwrap_or_else(|| DEFAULT_JOURNAL.to_string()),
            publication_date,
            non_academic_authors: authors.join(LIST_SEPARATOR),
            company_affiliations: affiliations.join(LIST_SEPARATOR),
            corresponding_email: email,
        })
    }
}

/// Per-batch extraction state: the identifiers already seen
#[derive(Debug)]
pub struct BatchExtractor<'a> {
    rules: &'a RecordExtractor,
    seen: HashSet<String>,
}

impl BatchExtractor<'_> {
    /// Extract one record, or `None` if it is a duplicate or has no
    /// commercially affiliated author
    pub fn extract(&mut self, record: &RawRecord) -> Option<FilteredRecord> {
        if !self.seen.insert(record.pmid.clone()) {
            debug!(pmid = %record.pmid, "Skipping duplicate record");
            return None;
        }

        self.rules.build(record)
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
