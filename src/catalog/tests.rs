use super::*;
use serde_json::json;

#[test]
fn test_extract_results_top_level() {
    let body = json!({"results": [{"id": "a"}, {"id": "b"}]});
    let results = extract_results(&body).expect("results present");
    assert_eq!(results.len(), 2);
}

#[test]
fn test_extract_results_data_envelope() {
    let body = json!({"data": {"total": 1, "results": [{"id": "a"}]}});
    let results = extract_results(&body).expect("results present");
    assert_eq!(results.len(), 1);
}

#[test]
fn test_extract_results_missing_array() {
    assert!(extract_results(&json!({"data": {}})).is_none());
    assert!(extract_results(&json!({"results": "not an array"})).is_none());
    assert!(extract_results(&json!([1, 2, 3])).is_none());
}

#[test]
fn test_client_trims_trailing_slash() {
    let client = HttpCatalogClient::new("https://catalog.example/api/", DEFAULT_SEARCH_TIMEOUT);
    assert_eq!(client.base_url(), "https://catalog.example/api");
}

#[tokio::test]
async fn test_mock_failure_injection() {
    let catalog = MockCatalog::new();
    catalog.with_results("Creep", vec![json!({"id": "c1"})]);
    catalog.fail_for("Karma Police");

    assert_eq!(catalog.search("Creep").await.expect("canned").len(), 1);
    assert!(matches!(
        catalog.search("Karma Police").await,
        Err(CatalogError::Status { status: 503, .. })
    ));
    assert!(catalog.search("Unknown").await.expect("miss").is_empty());
    assert_eq!(catalog.recorded_queries().len(), 3);
}
