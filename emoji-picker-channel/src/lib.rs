//! Minimal method channel over stdio.
//!
//! Reads line-delimited JSON-RPC 2.0 from a reader and writes responses to a
//! writer. The JSON-RPC `method` is the invocation name and `params` is the
//! argument bag handed to the bound [`MethodCallHandler`].
//!
//! # Module layout
//!
//! - [`jsonrpc`] — JSON-RPC 2.0 wire types, response helpers, and line framing
//! - [`method`] — [`MethodCall`], [`MethodResult`] and the handler trait
//! - [`channel`] — [`MethodChannel`]: handler binding and the serve loop
//! - [`plugin`] — [`Plugin`]: attach/detach lifecycle

pub mod channel;
pub mod jsonrpc;
pub mod method;
pub mod plugin;

pub use channel::{MethodChannel, ServeSummary};
pub use method::{MethodCall, MethodCallHandler, MethodResult};
pub use plugin::Plugin;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
