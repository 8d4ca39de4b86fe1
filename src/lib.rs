//! emoji-picker: answers whether the system font stack can render an emoji.
//!
//! The bridge receives method calls over a [`MethodChannel`](emoji_picker_channel::MethodChannel)
//! and answers them with a [`GlyphAvailabilityChecker`]:
//!
//! - `isAvailable` with `{"emoji": "…"}` returns a boolean
//! - `checkAvailability` with `{"emoji": {key: "…"}}` returns the entries
//!   whose candidate is available
//! - `getPlatformVersion` returns a description of the host OS
//! - anything else is answered as not implemented

pub mod app;
pub mod checker;
pub mod cli;
pub mod debug;
pub mod invocation;
pub mod platform;
pub mod plugin;

pub use checker::GlyphAvailabilityChecker;
pub use invocation::{Batch, Invocation, InvocationError};
pub use plugin::{EmojiPickerHandler, EmojiPickerPlugin};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
