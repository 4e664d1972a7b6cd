use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Characters trimmed from both ends of a token found by [`TokenScan`]
const TOKEN_PUNCTUATION: &[char] = &[';', ',', '.', ')', '('];

/// One way of locating an email address inside affiliation text
pub trait EmailStrategy: Send + Sync + fmt::Debug {
    fn find(&self, text: &str) -> Option<String>;
}

/// Whitespace-token scan: the first token containing `@`, punctuation trimmed
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenScan;

impl EmailStrategy for TokenScan {
    fn find(&self, text: &str) -> Option<String> {
        text.replace(',', " ")
            .split_whitespace()
            .find(|token| token.contains('@'))
            .map(|token| token.trim_matches(TOKEN_PUNCTUATION).to_string())
    }
}

/// Regex search for `[\w.-]+@[\w.-]+`, returned verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatch;

impl EmailStrategy for PatternMatch {
    fn find(&self, text: &str) -> Option<String> {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = EMAIL_REGEX
            .get_or_init(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("email pattern is valid"));

        re.find(text).map(|m| m.as_str().to_string())
    }
}

/// Ordered list of strategies; the first non-empty result wins
#[derive(Debug)]
pub struct EmailExtractor {
    strategies: Vec<Box<dyn EmailStrategy>>,
}

impl EmailExtractor {
    pub fn with_strategies(strategies: Vec<Box<dyn EmailStrategy>>) -> Self {
        Self { strategies }
    }

    /// ```
    /// use get_papers_list::extract::EmailExtractor;
    ///
    /// let emails = EmailExtractor::default();
    /// assert_eq!(emails.extract("Acme Inc, contact: john@acme.com"), "john@acme.com");
    /// assert_eq!(emails.extract("Acme Inc, Boston"), "");
    /// ```
    pub fn extract(&self, affiliation: &str) -> String {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.find(affiliation))
            .unwrap_or_default()
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::with_strategies(vec![Box::new(TokenScan), Box::new(PatternMatch)])
    }
}
