//! Method calls, results and the handler seam.

use serde::Serialize;
use serde_json::Value;

use crate::jsonrpc::{INTERNAL_ERROR, INVALID_PARAMS};

/// A single invocation received from the host: a method name plus a loosely
/// typed argument bag.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    /// `Value::Null` when the host sent no arguments
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Outcome of handling a [`MethodCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResult {
    /// The call succeeded with a JSON payload.
    Success(Value),
    /// The call was understood but failed.
    Error {
        code: i64,
        message: String,
        data: Option<Value>,
    },
    /// The method name is not handled.
    NotImplemented,
}

impl MethodResult {
    /// Serialize `value` into a success result.
    ///
    /// Serialization failures become an internal error result.
    pub fn success(value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => MethodResult::Success(value),
            Err(e) => MethodResult::Error {
                code: INTERNAL_ERROR,
                message: format!("Failed to encode result: {e}"),
                data: None,
            },
        }
    }

    /// An invalid-arguments error carrying `message`.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        MethodResult::Error {
            code: INVALID_PARAMS,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success(_))
    }
}

/// Handles calls arriving on a [`MethodChannel`](crate::MethodChannel).
pub trait MethodCallHandler {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult;
}

impl<F> MethodCallHandler for F
where
    F: Fn(&MethodCall) -> MethodResult,
{
    fn on_method_call(&self, call: &MethodCall) -> MethodResult {
        self(call)
    }
}
