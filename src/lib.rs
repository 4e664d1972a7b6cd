//! # get-papers-list
//!
//! Finds PubMed papers with at least one author affiliated with a
//! pharmaceutical or biotech company and exports them as CSV.
//!
//! A batch runs in three steps:
//!
//! - **Search**: ESearch returns matching PubMed identifiers
//! - **Fetch**: EFetch returns the full records in one XML request
//! - **Extract**: authors are classified by affiliation and qualifying
//!   records are flattened into [`FilteredRecord`]s
//!
//! ## Quick Start
//!
//! ```no_run
//! use get_papers_list::{Pipeline, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::new(PubMedClient::new());
//!     let report = pipeline.run_with_report("cancer immunotherapy", 20).await?;
//!
//!     println!("Fetched {} identifiers", report.identifiers_found);
//!     get_papers_list::write_to_path(&report.records, "papers.csv")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Extracting from already-fetched XML
//!
//! ```
//! use get_papers_list::RecordExtractor;
//! use get_papers_list::pubmed::parse_records_from_xml;
//!
//! let xml = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
//!     <PMID>1</PMID>
//!     <Article>
//!         <ArticleTitle>Sample</ArticleTitle>
//!         <AuthorList><Author>
//!             <LastName>Doe</LastName><ForeName>John</ForeName>
//!             <AffiliationInfo><Affiliation>Pfizer Inc, USA</Affiliation></AffiliationInfo>
//!         </Author></AuthorList>
//!     </Article>
//! </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
//!
//! let entries = parse_records_from_xml(xml).unwrap();
//! let records = RecordExtractor::default().extract_all(entries);
//! assert_eq!(records[0].non_academic_authors, "John Doe");
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod pipeline;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{MalformedRecord, PapersError, Result};
pub use export::{write_records, write_to_path, COLUMNS};
pub use extract::{FilteredRecord, RecordExtractor};
pub use pipeline::{BatchReport, LiteratureSource, Pipeline};
pub use pubmed::models::{DateFragment, RawAuthor, RawRecord, RecordEntry};
pub use pubmed::PubMedClient;
