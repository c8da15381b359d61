//! Transport contract tests against a mock HTTP server.

use std::sync::Once;

use mockito::Matcher;
use serde_json::json;

use raikit_core::{Endpoint, HttpTransport, NodeClient, RpcError, RpcRequest, Transport};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("raikit_core=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

#[tokio::test]
async fn send_posts_exactly_once_with_the_request_action() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({"action": "block_count"})))
        .with_body(r#"{"count": "1", "unchecked": "0"}"#)
        .expect(1)
        .create_async()
        .await;

    let transport = HttpTransport::new(Endpoint::new(server.url()));
    transport
        .send(&RpcRequest::new("block_count"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_a_soft_failure_with_no_second_post() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let transport = HttpTransport::new(Endpoint::new(server.url()));
    let err = transport
        .send(&RpcRequest::new("block_count"))
        .await
        .unwrap_err();

    assert!(err.is_rejected_status());
    match err {
        RpcError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
    // expect(1) + assert verifies the transport never retried.
    mock.assert_async().await;
}

#[tokio::test]
async fn successful_body_is_returned_as_the_parsed_mapping() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_body(r#"{"result": "ok"}"#)
        .create_async()
        .await;

    let transport = HttpTransport::new(Endpoint::new(server.url()));
    let response = transport.send(&RpcRequest::new("version")).await.unwrap();

    assert_eq!(response.len(), 1);
    assert_eq!(response["result"], "ok");
}

#[tokio::test]
async fn invalid_json_in_a_successful_response_is_a_parse_fault() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_body("not-json")
        .create_async()
        .await;

    let transport = HttpTransport::new(Endpoint::new(server.url()));
    let err = transport
        .send(&RpcRequest::new("block_count"))
        .await
        .unwrap_err();

    assert!(matches!(err, RpcError::Malformed(_)));
}

#[tokio::test]
async fn request_round_trips_key_set_and_values() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    // Matcher::Json compares parsed documents: exact key set and values,
    // independent of field ordering.
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({"action": "foo", "bar": 1})))
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let transport = HttpTransport::new(Endpoint::new(server.url()));
    transport
        .send(&RpcRequest::new("foo").param("bar", 1))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn block_count_scenario_returns_the_mapping_unchanged() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({"action": "block_count"})))
        .with_body(r#"{"count": "1000", "unchecked": "10"}"#)
        .create_async()
        .await;

    let transport = HttpTransport::new(Endpoint::new(server.url()));
    let response = transport
        .send(&RpcRequest::new("block_count"))
        .await
        .unwrap();

    assert_eq!(response.len(), 2);
    assert_eq!(response["count"], "1000");
    assert_eq!(response["unchecked"], "10");
}

#[tokio::test]
async fn connection_fault_propagates_as_a_transport_error() {
    init_tracing();
    // Port 1 is never listening locally; the dial fails outright.
    let transport = HttpTransport::new(Endpoint::new("http://127.0.0.1:1"));
    let err = transport
        .send(&RpcRequest::new("block_count"))
        .await
        .unwrap_err();

    assert!(matches!(err, RpcError::Transport(_)));
    assert!(!err.is_rejected_status());
}

#[tokio::test]
async fn client_wrappers_work_end_to_end_over_http() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({"action": "block_count"})))
        .with_body(r#"{"count": "1000", "unchecked": "10"}"#)
        .create_async()
        .await;

    let client = NodeClient::connect(Endpoint::new(server.url()));
    let counts = client.block_count().await.unwrap();
    assert_eq!(counts.count, 1000);
    assert_eq!(counts.unchecked, 10);
}

#[tokio::test]
async fn node_error_bodies_surface_through_the_client() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_body(r#"{"error": "Bad account number"}"#)
        .create_async()
        .await;

    let client = NodeClient::connect(Endpoint::new(server.url()));
    let err = client.account_balance("xrb_invalid").await.unwrap_err();
    match err {
        RpcError::Node(message) => assert_eq!(message, "Bad account number"),
        other => panic!("expected node error, got {other:?}"),
    }
}
