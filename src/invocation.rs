//! Typed view of the calls the emoji picker understands.
//!
//! Method names are matched once, here, and their argument bags are decoded
//! into fixed structs. Anything else is reported as unknown so the channel
//! can answer "not implemented".

use std::collections::HashMap;

use emoji_picker_channel::MethodCall;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Method name: single-candidate check.
pub const IS_AVAILABLE: &str = "isAvailable";
/// Method name: batch filter.
pub const CHECK_AVAILABILITY: &str = "checkAvailability";
/// Method name: host platform description.
pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// Caller key → candidate mapping.
pub type Batch = HashMap<String, String>;

/// A decoded, supported invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    IsAvailable { emoji: String },
    CheckAvailability { emoji: Batch },
    GetPlatformVersion,
}

/// Malformed argument bag for a known method.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("invalid arguments for '{method}': {source}")]
    InvalidArguments {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct IsAvailableArgs {
    emoji: String,
}

#[derive(Deserialize)]
struct CheckAvailabilityArgs {
    emoji: Batch,
}

fn decode<T: DeserializeOwned>(method: &'static str, call: &MethodCall) -> Result<T, InvocationError> {
    T::deserialize(&call.arguments)
        .map_err(|source| InvocationError::InvalidArguments { method, source })
}

impl Invocation {
    /// Decode `call`.
    ///
    /// Returns `Ok(None)` for method names this plugin does not handle.
    pub fn parse(call: &MethodCall) -> Result<Option<Self>, InvocationError> {
        let invocation = match call.method.as_str() {
            IS_AVAILABLE => {
                let args: IsAvailableArgs = decode(IS_AVAILABLE, call)?;
                Invocation::IsAvailable { emoji: args.emoji }
            }
            CHECK_AVAILABILITY => {
                let args: CheckAvailabilityArgs = decode(CHECK_AVAILABILITY, call)?;
                Invocation::CheckAvailability { emoji: args.emoji }
            }
            GET_PLATFORM_VERSION => Invocation::GetPlatformVersion,
            _ => return Ok(None),
        };
        Ok(Some(invocation))
    }

    /// The wire name of this invocation.
    pub fn method_name(&self) -> &'static str {
        match self {
            Invocation::IsAvailable { .. } => IS_AVAILABLE,
            Invocation::CheckAvailability { .. } => CHECK_AVAILABILITY,
            Invocation::GetPlatformVersion => GET_PLATFORM_VERSION,
        }
    }
}
