//! CSV export round-trips through the filesystem

use std::fs;

use get_papers_list::{write_to_path, FilteredRecord, COLUMNS};

fn sample(pmid: &str) -> FilteredRecord {
    FilteredRecord {
        pmid: pmid.to_string(),
        title: format!("Title {pmid}, with a comma"),
        journal: "Unknown Journal".to_string(),
        publication_date: "2021-03-01".to_string(),
        non_academic_authors: "John Doe; Ann Lee".to_string(),
        company_affiliations: "Pfizer Inc, USA; Acme Ltd".to_string(),
        corresponding_email: "john@pfizer.com".to_string(),
    }
}

#[test]
fn test_file_has_header_plus_one_line_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let records = vec![sample("1"), sample("2"), sample("3")];

    let written = write_to_path(&records, &output).unwrap();
    assert_eq!(written, 3);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], COLUMNS.join(","));
}

#[test]
fn test_round_trip_preserves_fields() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let records = vec![sample("10"), sample("20")];

    write_to_path(&records, &output).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let read_back: Vec<FilteredRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(read_back, records);
}

#[test]
fn test_existing_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    fs::write(&output, "stale contents\nfrom an earlier run\nline three\n").unwrap();

    write_to_path(&[sample("1")], &output).unwrap();
    write_to_path(&[sample("2")], &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
    assert!(content.lines().nth(1).unwrap().starts_with("2,"));
}

#[test]
fn test_empty_batch_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("empty.csv");

    assert_eq!(write_to_path(&[], &output).unwrap(), 0);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec![COLUMNS.join(",")]);
}

#[test]
fn test_unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing-dir").join("out.csv");

    let result = write_to_path(&[sample("1")], &output);
    assert!(matches!(result, Err(get_papers_list::PapersError::IoError(_))));
}
