//! E-utilities client behavior against a mocked NCBI server

mod common;

use common::{article, article_set, create_mock_client, ESEARCH_TWO_IDS};
use get_papers_list::{ClientConfig, PapersError, PubMedClient};
use rstest::rstest;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_esearch(mock_server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(template)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_search_returns_ids_in_order() {
    let mock_server = MockServer::start().await;
    mount_esearch(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(ESEARCH_TWO_IDS),
    )
    .await;

    let ids = create_mock_client(&mock_server)
        .search_articles("cancer", 20)
        .await
        .unwrap();

    assert_eq!(ids, vec!["12345678".to_string(), "87654321".to_string()]);
}

#[rstest]
#[case(400)]
#[case(429)]
#[case(500)]
#[case(502)]
#[tokio::test]
async fn test_search_status_errors(#[case] status: u16) {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ResponseTemplate::new(status)).await;

    let result = create_mock_client(&mock_server)
        .search_articles("cancer", 20)
        .await;

    match result {
        Err(PapersError::ApiError { status: got, .. }) => assert_eq!(got, status),
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_error_field_in_ok_response() {
    let mock_server = MockServer::start().await;
    mount_esearch(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"ERROR": "Invalid query syntax"}}"#,
        ),
    )
    .await;

    let result = create_mock_client(&mock_server)
        .search_articles("cancer[[", 20)
        .await;

    match result {
        Err(PapersError::ApiError { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("Invalid query syntax"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_malformed_json() {
    let mock_server = MockServer::start().await;
    mount_esearch(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("{not json"),
    )
    .await;

    let result = create_mock_client(&mock_server)
        .search_articles("cancer", 20)
        .await;

    assert!(matches!(result, Err(PapersError::RequestError(_))));
}

#[tokio::test]
async fn test_search_missing_idlist() {
    let mock_server = MockServer::start().await;
    mount_esearch(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(r#"{"esearchresult": {"count": "0"}}"#),
    )
    .await;

    let result = create_mock_client(&mock_server)
        .search_articles("cancer", 20)
        .await;

    assert!(matches!(
        result,
        Err(PapersError::ApiError { status: 200, .. })
    ));
}

#[tokio::test]
async fn test_api_params_are_appended() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("api_key", "secret-key"))
        .and(query_param("email", "researcher@university.edu"))
        .and(query_param("tool", "survey-tool"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_TWO_IDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_api_key("secret-key")
        .with_email("researcher@university.edu")
        .with_tool("survey-tool");

    let ids = PubMedClient::with_config(config)
        .search_articles("cancer", 20)
        .await
        .unwrap();

    assert_eq!(ids.len(), 2);
}

#[tokio::test]
async fn test_fetch_parses_entries_in_document_order() {
    let mock_server = MockServer::start().await;
    let body = article_set(&[
        &article("2", "Second", &[("Ann", "Lee", "Acme Ltd")]),
        "<PubmedArticle></PubmedArticle>",
        &article("1", "First", &[]),
    ]);

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "1,2,3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];
    let entries = create_mock_client(&mock_server)
        .fetch_records(&ids)
        .await
        .unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].as_ref().unwrap().pmid, "2");
    assert_eq!(entries[0].as_ref().unwrap().authors.len(), 1);
    assert!(entries[1].is_err());
    assert_eq!(entries[2].as_ref().unwrap().pmid, "1");
}

#[tokio::test]
#[traced_test]
async fn test_fetch_empty_body_yields_no_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  \n"))
        .mount(&mock_server)
        .await;

    let entries = create_mock_client(&mock_server)
        .fetch_records(&["1".to_string()])
        .await
        .unwrap();

    assert!(entries.is_empty());
    assert!(logs_contain("EFetch returned an empty body"));
}

#[tokio::test]
async fn test_fetch_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = create_mock_client(&mock_server)
        .fetch_records(&["1".to_string()])
        .await;

    match result {
        Err(PapersError::ApiError { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}
