//! Search → fetch → extract orchestration

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::error::Result;
use crate::extract::{FilteredRecord, RecordExtractor};
use crate::pubmed::models::RecordEntry;

/// The two external calls a batch depends on
///
/// [`PubMedClient`](crate::pubmed::PubMedClient) is the production
/// implementation; tests substitute in-memory sources.
#[async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Up to `limit` record identifiers for `query`, in service order
    async fn search_ids(&self, query: &str, limit: usize) -> Result<Vec<String>>;

    /// Raw records for `ids`, in document order; missing ids are simply absent
    async fn fetch_records(&self, ids: &[String]) -> Result<Vec<RecordEntry>>;
}

/// Counts and results of one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Identifiers returned by the search step
    pub identifiers_found: usize,
    /// Records that passed the industry-affiliation filter
    pub records: Vec<FilteredRecord>,
}

pub struct Pipeline<S> {
    source: S,
    extractor: RecordExtractor,
}

impl<S: LiteratureSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            extractor: RecordExtractor::default(),
        }
    }

    pub fn with_extractor(mut self, extractor: RecordExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Run a batch and return only the filtered records
    pub async fn run(&self, query: &str, max_results: usize) -> Result<Vec<FilteredRecord>> {
        Ok(self.run_with_report(query, max_results).await?.records)
    }

    /// Run a batch: search, fetch every hit in one request, then extract
    ///
    /// Search or fetch failures abort the batch. Malformed individual
    /// records are skipped. When the search finds nothing the fetch step is
    /// not invoked.
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn run_with_report(&self, query: &str, max_results: usize) -> Result<BatchReport> {
        let ids = self.search(query, max_results).await?;
        let records = self.fetch_and_extract(&ids).await?;

        Ok(BatchReport {
            identifiers_found: ids.len(),
            records,
        })
    }

    /// Search step on its own
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let ids = self.source.search_ids(query, max_results).await?;
        info!(identifiers = ids.len(), "Search step finished");
        Ok(ids)
    }

    /// Fetch and extract step on its own; no ids means no fetch
    pub async fn fetch_and_extract(&self, ids: &[String]) -> Result<Vec<FilteredRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.source.fetch_records(ids).await?;
        let records = self.extractor.extract_all(entries);
        info!(
            identifiers = ids.len(),
            filtered = records.len(),
            "Extraction finished"
        );

        Ok(records)
    }
}
