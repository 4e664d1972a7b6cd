use crate::error::MalformedRecord;

/// One bibliographic record as delivered by EFetch, before classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// PubMed ID; empty when the article carried no `PMID` element
    pub pmid: String,
    pub title: Option<String>,
    pub journal: Option<String>,
    /// `Journal/JournalIssue/PubDate`, if present
    pub pub_date: Option<DateFragment>,
    /// Authors in declaration order
    pub authors: Vec<RawAuthor>,
}

/// Partial publication date; any part may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFragment {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAuthor {
    pub fore_name: Option<String>,
    pub last_name: Option<String>,
    /// First affiliation listed for the author
    pub affiliation: Option<String>,
}

impl RawAuthor {
    /// Fore name and last name joined by a space, skipping absent or empty parts
    pub fn full_name(&self) -> String {
        [self.fore_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Outcome of converting one `PubmedArticle` element
pub type RecordEntry = std::result::Result<RawRecord, MalformedRecord>;
