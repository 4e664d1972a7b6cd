/// Tokens whose presence marks an affiliation as commercial
pub const DEFAULT_COMPANY_KEYWORDS: [&str; 10] = [
    "Inc",
    "Ltd",
    "LLC",
    "Corporation",
    "Corp",
    "Pharma",
    "Biotech",
    "Diagnostics",
    "Therapeutics",
    "Laboratories",
];

/// Decides whether a free-text affiliation names a for-profit organization
///
/// Matching is a case-sensitive substring test with no word boundaries, so
/// `"Incyte"` matches `Inc` and `"Pharmacology"` matches `Pharma`.
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    keywords: Vec<String>,
}

impl AffiliationClassifier {
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// ```
    /// use get_papers_list::extract::AffiliationClassifier;
    ///
    /// let classifier = AffiliationClassifier::default();
    /// assert!(classifier.is_commercial("Pfizer Inc, USA"));
    /// assert!(!classifier.is_commercial("University of Example"));
    /// ```
    pub fn is_commercial(&self, affiliation: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| affiliation.contains(keyword.as_str()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::with_keywords(DEFAULT_COMPANY_KEYWORDS)
    }
}
