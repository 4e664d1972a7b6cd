//! Parsing plus extraction over realistic EFetch documents

mod common;

use common::{article, article_set, EFETCH_MIXED};
use get_papers_list::extract::{AffiliationClassifier, DateNormalizer, EmailExtractor};
use get_papers_list::pubmed::parse_records_from_xml;
use get_papers_list::RecordExtractor;
use tracing_test::traced_test;

#[test]
fn test_mixed_document_keeps_industry_record() {
    let entries = parse_records_from_xml(EFETCH_MIXED).unwrap();
    assert_eq!(entries.len(), 2);

    let records = RecordExtractor::default().extract_all(entries);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pmid, "12345678");
    assert_eq!(records[0].non_academic_authors, "John Doe");
}

#[test]
fn test_duplicate_pmids_keep_first_occurrence() {
    let xml = article_set(&[
        &article("100", "Original", &[("John", "Doe", "Pfizer Inc")]),
        &article("200", "Other", &[("Ann", "Lee", "Acme Ltd")]),
        &article("100", "Repeat", &[("John", "Doe", "Pfizer Inc")]),
    ]);

    let records = RecordExtractor::default().extract_all(parse_records_from_xml(&xml).unwrap());

    let summary: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.pmid.as_str(), r.title.as_str()))
        .collect();
    assert_eq!(summary, vec![("100", "Original"), ("200", "Other")]);
}

#[test]
fn test_email_and_multiple_affiliations() {
    let xml = article_set(&[&article(
        "300",
        "Multi-site trial",
        &[
            ("Ann", "Lee", "University of Example"),
            ("Bo", "Chan", "Acme Therapeutics, San Diego, CA. bo.chan@acme.com."),
            ("Cy", "Moss", "Beta Biotech LLC, Cambridge"),
        ],
    )]);

    let records = RecordExtractor::default().extract_all(parse_records_from_xml(&xml).unwrap());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].non_academic_authors, "Bo Chan; Cy Moss");
    assert_eq!(
        records[0].company_affiliations,
        "Acme Therapeutics, San Diego, CA. bo.chan@acme.com.; Beta Biotech LLC, Cambridge"
    );
    assert_eq!(records[0].corresponding_email, "bo.chan@acme.com");
}

#[test]
#[traced_test]
fn test_malformed_entry_is_logged_and_skipped() {
    let xml = article_set(&[
        "<PubmedArticle><MedlineCitation><PMID>400</PMID></MedlineCitation></PubmedArticle>",
        &article("401", "Fine", &[("John", "Doe", "Pfizer Inc")]),
    ]);

    let records = RecordExtractor::default().extract_all(parse_records_from_xml(&xml).unwrap());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pmid, "401");
    assert!(logs_contain("Skipped invalid paper entry"));
    assert!(logs_contain("missing Article"));
}

#[test]
fn test_markup_heavy_article_does_not_drop_its_neighbors() {
    let xml = article_set(&[
        &article(
            "600",
            r#"Uptake of <mml:math xmlns:mml="http://www.w3.org/1998/Math/MathML"><mml:msup><mml:mi>F</mml:mi><mml:mn>18</mml:mn></mml:msup></mml:math> tracer"#,
            &[("Ann", "Lee", r#"Acme <span class="org">Biotech</span> Ltd"#)],
        ),
        &article("601", "Plain", &[("John", "Doe", "Pfizer Inc")]),
    ]);

    let records = RecordExtractor::default().extract_all(parse_records_from_xml(&xml).unwrap());

    let pmids: Vec<&str> = records.iter().map(|r| r.pmid.as_str()).collect();
    assert_eq!(pmids, vec!["600", "601"]);
    assert!(records[0].title.starts_with("Uptake of"));
    assert!(records[0].company_affiliations.contains("Biotech"));
}

#[test]
#[traced_test]
fn test_unparseable_article_is_skipped_with_warning() {
    let xml = article_set(&[
        "<PubmedArticle><MedlineCitation><PMID>700</PMID><Article></Oops></MedlineCitation></PubmedArticle>",
        &article("701", "Fine", &[("John", "Doe", "Pfizer Inc")]),
    ]);

    let records = RecordExtractor::default().extract_all(parse_records_from_xml(&xml).unwrap());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pmid, "701");
    assert!(logs_contain("parsing articles individually"));
    assert!(logs_contain("unparseable article"));
}

#[test]
fn test_custom_rules_change_the_outcome() {
    let xml = article_set(&[&article(
        "500",
        "German study",
        &[("Jan", "Roe", "Bayer GmbH, Leverkusen")],
    )]);

    assert!(
        RecordExtractor::default()
            .extract_all(parse_records_from_xml(&xml).unwrap())
            .is_empty()
    );

    let extractor = RecordExtractor::new(
        AffiliationClassifier::with_keywords(["GmbH"]),
        EmailExtractor::default(),
        DateNormalizer::default(),
    );
    let records = extractor.extract_all(parse_records_from_xml(&xml).unwrap());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].company_affiliations, "Bayer GmbH, Leverkusen");
}
