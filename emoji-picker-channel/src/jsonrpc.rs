//! JSON-RPC 2.0 wire types and response helpers.
//!
//! This module contains the minimal set of types needed to carry method
//! channel traffic as JSON-RPC 2.0 over stdio: incoming message
//! deserialization, outgoing response serialization, and the standard error
//! constructors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Write;

use crate::MethodResult;

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Invalid JSON was received.
pub const PARSE_ERROR: i64 = -32700;
/// The JSON sent is not a valid request object.
pub const INVALID_REQUEST: i64 = -32600;
/// The method does not exist or is not implemented.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Invalid method parameters.
pub const INVALID_PARAMS: i64 = -32602;
/// Internal handler error.
pub const INTERNAL_ERROR: i64 = -32603;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// An incoming JSON-RPC 2.0 message from the host.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    #[allow(dead_code)] // Part of the JSON-RPC envelope; never read
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub params: Option<Value>,
}

/// An outgoing JSON-RPC 2.0 response.
#[derive(Debug, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Value,
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// ---------------------------------------------------------------------------
// Response constructors
// ---------------------------------------------------------------------------

/// Build a success response.
pub fn success_response(id: Value, result: Value) -> Response {
    Response {
        jsonrpc: "2.0",
        result: Some(result),
        error: None,
        id,
    }
}

/// Build an error response.
pub fn error_response(id: Value, code: i64, message: String, data: Option<Value>) -> Response {
    Response {
        jsonrpc: "2.0",
        result: None,
        error: Some(RpcError {
            code,
            message,
            data,
        }),
        id,
    }
}

/// Build a method-not-implemented error response.
pub fn not_implemented(id: Value, method: &str) -> Response {
    error_response(
        id,
        METHOD_NOT_FOUND,
        format!("Method not implemented: {method}"),
        None,
    )
}

/// Build a parse error response.
pub fn parse_error() -> Response {
    error_response(Value::Null, PARSE_ERROR, "Parse error".to_string(), None)
}

/// Build an invalid request error response for a message with no method.
pub fn invalid_request(id: Value) -> Response {
    error_response(
        id,
        INVALID_REQUEST,
        "Invalid Request: missing method".to_string(),
        None,
    )
}

/// Convert a handler's [`MethodResult`] into the response for request `id`.
pub fn response_for(id: Value, method: &str, result: MethodResult) -> Response {
    match result {
        MethodResult::Success(value) => success_response(id, value),
        MethodResult::Error {
            code,
            message,
            data,
        } => error_response(id, code, message, data),
        MethodResult::NotImplemented => not_implemented(id, method),
    }
}

// ---------------------------------------------------------------------------
// I/O helper
// ---------------------------------------------------------------------------

/// Send a JSON-RPC response to a writer as a single newline-terminated line.
pub fn send_response(writer: &mut impl Write, response: &Response) {
    match serde_json::to_string(response) {
        Ok(json) => {
            if let Err(e) = writeln!(writer, "{json}") {
                log::error!("Failed to write response: {e}");
            }
            if let Err(e) = writer.flush() {
                log::error!("Failed to flush response: {e}");
            }
        }
        Err(e) => {
            log::error!("Failed to serialize response: {e}");
        }
    }
}
