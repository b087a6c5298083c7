//! Embedding client behavior against a mock endpoint.

use httpmock::prelude::*;

use laroplan_ingest::config::EmbeddingConfig;
use laroplan_ingest::embedding::EmbeddingClient;

fn client_for(url: String, dims: usize, max_input_chars: usize) -> EmbeddingClient {
    EmbeddingClient::new(&EmbeddingConfig {
        url,
        dims,
        timeout_secs: 5,
        max_input_chars,
    })
    .unwrap()
}

#[tokio::test]
async fn sends_cleaned_text_and_returns_vector() {
    let server = MockServer::start_async().await;

    // Whitespace runs collapse before transmission.
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/embed")
                .body_contains("\"text\":\"ett två tre\"");
            then.status(200)
                .json_body(serde_json::json!({ "embedding": [0.5, -0.5] }));
        })
        .await;

    let client = client_for(server.url("/embed"), 2, 2048);
    let embedding = client.embed("ett  två\n\ntre").await.unwrap();

    assert_eq!(mock.hits_async().await, 1);
    assert_eq!(embedding.vector, vec![0.5f32, -0.5]);
    assert!(embedding.dims_match());
}

#[tokio::test]
async fn non_success_response_surfaces_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/embed");
            then.status(422).body("ogiltig indata");
        })
        .await;

    let client = client_for(server.url("/embed"), 2, 2048);
    let err = client.embed("någon text att bädda in").await.unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("422"), "missing status in: {message}");
    assert!(
        message.contains("ogiltig indata"),
        "missing body in: {message}"
    );
}

#[tokio::test]
async fn malformed_response_body_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/embed");
            then.status(200).json_body(serde_json::json!({ "vector": [1.0] }));
        })
        .await;

    let client = client_for(server.url("/embed"), 2, 2048);
    assert!(client.embed("någon text").await.is_err());
}

#[tokio::test]
async fn dimension_mismatch_is_not_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/embed");
            then.status(200)
                .json_body(serde_json::json!({ "embedding": [1.0, 2.0, 3.0] }));
        })
        .await;

    let client = client_for(server.url("/embed"), 768, 2048);
    let embedding = client.embed("någon text").await.unwrap();

    assert!(!embedding.dims_match());
    assert_eq!(embedding.vector.len(), 3);
}

#[tokio::test]
async fn input_is_truncated_to_the_configured_limit() {
    let server = MockServer::start_async().await;

    // 10-char cap: only the first ten characters may reach the service.
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/embed")
                .body_contains("\"text\":\"abcdefghij\"");
            then.status(200)
                .json_body(serde_json::json!({ "embedding": [0.0, 0.0] }));
        })
        .await;

    let client = client_for(server.url("/embed"), 2, 10);
    client.embed("abcdefghijklmnop").await.unwrap();

    assert_eq!(mock.hits_async().await, 1);
}
