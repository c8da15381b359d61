//! Shared test helpers for `raikit-core` unit tests.
//!
//! Consolidates fixture builders (dummy accounts, hashes, canned JSON
//! responses) so that tests across modules share a single source of truth
//! for dummy data construction.

use serde_json::Value;

use crate::rpc::mock::{MockTransport, MockTransportBuilder};
use crate::rpc::Response;

/// 64-hex-char block hash with a single distinguishing byte.
pub fn hash_from_byte(b: u8) -> String {
    format!("{b:064X}")
}

/// Deterministic dummy xrb_ address with a distinguishing digit.
/// Not a valid checksummed address; the wrappers never validate addresses.
pub fn account_from_digit(d: u8) -> String {
    format!("xrb_{}", format!("{d}").repeat(60))
}

/// Convert a JSON literal into the `Response` map type.
/// Panics if the literal is not an object.
pub fn response_object(body: Value) -> Response {
    match body {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

/// Shorthand for a mock transport answering a single action.
pub fn mock_single(action: &str, body: Value) -> MockTransport {
    mock_builder().with_response(action, body).build()
}

pub fn mock_builder() -> MockTransportBuilder {
    MockTransport::builder()
}
