//! PubMed E-utilities access
//!
//! ESearch for identifiers, EFetch for records, and the XML parser that
//! turns EFetch output into [`RecordEntry`](models::RecordEntry)s.

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

pub use client::PubMedClient;
pub use parser::parse_records_from_xml;
