//! CSV export of filtered records

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::extract::FilteredRecord;

/// Header row, in column order
pub const COLUMNS: [&str; 7] = [
    "PubmedID",
    "Title",
    "Journal",
    "Publication Date",
    "Non-academicAuthor(s)",
    "CompanyAffiliation(s)",
    "Corresponding Author Email",
];

/// Write a header row then one row per record, returning the rows written
///
/// Fields containing the delimiter, quotes or newlines are quoted. Every row
/// has exactly [`COLUMNS`]`.len()` fields; any write failure aborts the export.
pub fn write_records<W: io::Write>(records: &[FilteredRecord], writer: W) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;

    for record in records {
        csv_writer.write_record(record.as_row())?;
    }

    csv_writer.flush()?;
    Ok(records.len())
}

/// Create or truncate `path` and write `records` to it
#[instrument(skip(records, path), fields(path = %path.as_ref().display(), records = records.len()))]
pub fn write_to_path<P: AsRef<Path>>(records: &[FilteredRecord], path: P) -> Result<usize> {
    let file = File::create(path.as_ref())?;
    let written = write_records(records, io::BufWriter::new(file))?;
    debug!(rows = written, "CSV file written");
    Ok(written)
}
