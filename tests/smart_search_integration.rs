//! End-to-end smart-search scenarios over the public API, with both
//! collaborators mocked (`mock` feature).

use std::sync::Arc;

use axum::{body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use tunescout::{
    AppState, MockCatalog, MockOracle, PipelineError, SmartSearchPipeline, SongQuery,
    create_router_with_state,
};

const API_KEY: &str = "integration-secret";

fn track(id: &str, name: &str, artist: &str, play_count: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "primaryArtists": artist,
        "album": {"name": "Test Album"},
        "language": "english",
        "year": "2017",
        "playCount": play_count,
        "image": [
            {"quality": "50x50", "url": "https://img.example/50.jpg"},
            {"quality": "500x500", "url": "https://img.example/500.jpg"}
        ],
        "downloadUrl": [{"quality": "320kbps", "url": "https://cdn.example/320.mp4"}],
    })
}

async fn post(
    router: axum::Router,
    path: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .header("x-api-key", API_KEY)
        .body(Body::from(body.to_string()))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_vague_request_full_flow() {
    let oracle = Arc::new(MockOracle::new());
    let catalog = Arc::new(MockCatalog::new());

    oracle.push_reply(
        "```json\n{\"songs\": [\"Creep - Radiohead\", \"No Surprises - Radiohead\", \
         \"Black - Pearl Jam\"]}\n```",
    );
    catalog.with_results(
        "Creep - Radiohead",
        vec![
            track("c1", "Creep", "Radiohead", 900_000),
            track("c2", "Creep (Acoustic)", "Radiohead", 30_000),
        ],
    );
    catalog.with_results(
        "No Surprises - Radiohead",
        vec![track("n1", "No Surprises", "Radiohead", 400_000)],
    );
    catalog.with_results(
        "Black - Pearl Jam",
        vec![track("b1", "Black", "Pearl Jam", 350_000)],
    );
    // c2 is below the threshold, so three candidates reach the judge.
    oracle.push_reply("{\"relevance\": [1, 1, 0]}");

    let state = AppState::new(oracle.clone(), catalog, API_KEY);
    let router = create_router_with_state(state);

    let (status, body) = post(router, "/smart-search", json!({"songs": "sad 90s rock"})).await;

    assert_eq!(status, StatusCode::OK);
    let suggested = body["suggestedSongs"].as_array().expect("array");
    let ids: Vec<&str> = suggested
        .iter()
        .map(|song| song["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["c1", "n1"]);

    // The record→entity boundary picked the highest-quality artwork.
    assert_eq!(suggested[0]["imageUrl"], "https://img.example/500.jpg");

    // Both oracle calls carried the user's request verbatim.
    let prompts = oracle.recorded_prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].1.contains("sad 90s rock"));
    assert!(prompts[1].1.contains("sad 90s rock"));
}

#[tokio::test]
async fn test_misaligned_judgment_fails_closed() {
    let oracle = Arc::new(MockOracle::new());
    let catalog = Arc::new(MockCatalog::new());

    oracle.push_reply("{\"songs\": [\"One\", \"Two\"]}");
    catalog.with_results("One", vec![track("a", "One", "X", 100_000)]);
    catalog.with_results("Two", vec![track("b", "Two", "Y", 100_000)]);
    oracle.push_reply("{\"relevance\": [1]}");

    let pipeline = SmartSearchPipeline::new(oracle, catalog);
    let result = pipeline.run(&SongQuery::One("rock".to_string())).await;

    assert!(matches!(
        result,
        Err(PipelineError::AlignmentMismatch {
            expected: 2,
            actual: 1
        })
    ));
}

#[tokio::test]
async fn test_catalog_outage_for_one_title_degrades_gracefully() {
    let oracle = Arc::new(MockOracle::new());
    let catalog = Arc::new(MockCatalog::new());

    oracle.push_reply("{\"songs\": [\"One\", \"Two\", \"Three\"]}");
    catalog.with_results("One", vec![track("a", "One", "X", 100_000)]);
    catalog.fail_for("Two");
    catalog.with_results("Three", vec![track("c", "Three", "Z", 100_000)]);
    oracle.push_reply("{\"relevance\": [1, 1]}");

    let state = AppState::new(oracle, catalog, API_KEY);
    let router = create_router_with_state(state);

    let (status, body) = post(router, "/smart-search", json!({"songs": "rock"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestedSongs"].as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn test_filter_songs_round_trip() {
    let oracle = Arc::new(MockOracle::new());
    let catalog = Arc::new(MockCatalog::new());

    oracle.push_reply(
        "```json\n{\"suggestedSongs\": [{\"name\": \"Black\", \"artist\": \"Pearl Jam\", \
         \"reason\": \"the studio original\"}]}\n```",
    );

    let state = AppState::new(oracle, catalog, API_KEY);
    let router = create_router_with_state(state);

    let (status, body) = post(
        router,
        "/filter-songs",
        json!({"songs": ["Black - Pearl Jam", "Black (Live) - Pearl Jam"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let suggested = body["suggestedSongs"].as_array().expect("array");
    assert_eq!(suggested.len(), 1);
    assert_eq!(suggested[0]["artist"], "Pearl Jam");
}
