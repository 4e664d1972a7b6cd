/// Month abbreviations in calendar order; index + 1 is the month number
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Builds `YYYY-MM-DD` strings from partial PubMed dates
#[derive(Debug, Clone)]
pub struct DateNormalizer {
    months: Vec<String>,
}

impl DateNormalizer {
    /// Use a custom month vocabulary; position `i` maps to month `i + 1`
    pub fn with_months<I, S>(months: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            months: months.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalize a partial date
    ///
    /// An empty `year` yields an empty string. The month is resolved by an
    /// exact, case-sensitive match of its first three characters against
    /// the vocabulary and falls back to `01`. An empty day becomes `01`;
    /// otherwise the day is left-padded with zeros to width 2.
    ///
    /// ```
    /// use get_papers_list::extract::DateNormalizer;
    ///
    /// let dates = DateNormalizer::default();
    /// assert_eq!(dates.normalize("2024", "Jul", ""), "2024-07-01");
    /// assert_eq!(dates.normalize("2023", "Zzz", "5"), "2023-01-05");
    /// assert_eq!(dates.normalize("", "Jul", "15"), "");
    /// ```
    pub fn normalize(&self, year: &str, month: &str, day: &str) -> String {
        if year.is_empty() {
            return String::new();
        }

        let day = if day.is_empty() { "01" } else { day };

        format!("{}-{}-{:0>2}", year, self.month_number(month), day)
    }

    fn month_number(&self, month: &str) -> String {
        let prefix: String = month.chars().take(3).collect();

        self.months
            .iter()
            .position(|abbr| !prefix.is_empty() && *abbr == prefix)
            .map(|idx| format!("{:02}", idx + 1))
            .unwrap_or_else(|| "01".to_string())
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::with_months(MONTH_ABBREVIATIONS)
    }
}
