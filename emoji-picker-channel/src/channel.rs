//! Named method channel: handler binding and the request/response loop.

use std::io::{BufRead, Write};

use crate::jsonrpc::{
    IncomingMessage, invalid_request, parse_error, response_for, send_response,
};
use crate::method::{MethodCall, MethodCallHandler, MethodResult};

/// Counters returned when a serve loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeSummary {
    /// Requests that received a response (including error responses)
    pub responses: usize,
    /// Notifications dispatched without a response
    pub notifications: usize,
    /// Lines that were not valid JSON-RPC
    pub parse_errors: usize,
}

/// A named channel with at most one bound handler.
///
/// Calls are dispatched one at a time; with no handler bound every call is
/// answered as not implemented.
pub struct MethodChannel {
    name: String,
    handler: Option<Box<dyn MethodCallHandler>>,
}

impl std::fmt::Debug for MethodChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodChannel")
            .field("name", &self.name)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

impl MethodChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handler: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind `handler`, or unbind with `None`. The previous handler is dropped.
    pub fn set_method_call_handler(&mut self, handler: Option<Box<dyn MethodCallHandler>>) {
        log::debug!(
            "[{}] handler {}",
            self.name,
            if handler.is_some() { "bound" } else { "unbound" }
        );
        self.handler = handler;
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Dispatch a single call to the bound handler.
    pub fn invoke(&self, call: &MethodCall) -> MethodResult {
        match &self.handler {
            Some(handler) => handler.on_method_call(call),
            None => {
                log::warn!("[{}] no handler bound for '{}'", self.name, call.method);
                MethodResult::NotImplemented
            }
        }
    }

    /// Run the request loop. Reads line-delimited JSON-RPC messages from
    /// `reader` until the stream is closed or an I/O error occurs, writing
    /// one response line per request to `writer`.
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> ServeSummary {
        let mut summary = ServeSummary::default();

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    log::error!("[{}] Error reading input: {e}", self.name);
                    break;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            log::trace!("[{}] <- {trimmed}", self.name);

            let msg: IncomingMessage = match serde_json::from_str(trimmed) {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("[{}] Parse error: {e}", self.name);
                    summary.parse_errors += 1;
                    send_response(writer, &parse_error());
                    continue;
                }
            };

            let Some(method) = msg.method else {
                // A request id without a method still gets an answer
                match msg.id {
                    Some(id) => {
                        log::warn!("[{}] Request {id} has no method", self.name);
                        send_response(writer, &invalid_request(id));
                        summary.responses += 1;
                    }
                    None => log::debug!("[{}] Ignoring message without method", self.name),
                }
                continue;
            };

            let call = MethodCall::new(method, msg.params.unwrap_or_default());
            let result = self.invoke(&call);

            // Notifications (no id) are dispatched but never answered
            let Some(id) = msg.id else {
                log::debug!("[{}] Notification: {}", self.name, call.method);
                summary.notifications += 1;
                continue;
            };

            let response = response_for(id, &call.method, result);
            log::trace!(
                "[{}] -> {}",
                self.name,
                serde_json::to_string(&response).unwrap_or_else(|_| "<serialization error>".into())
            );
            send_response(writer, &response);
            summary.responses += 1;
        }

        log::info!("[{}] input closed, stopping", self.name);
        summary
    }
}
