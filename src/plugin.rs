//! The emoji picker plugin: method handler plus channel lifecycle.

use std::sync::Arc;

use emoji_picker_channel::{MethodCall, MethodCallHandler, MethodChannel, MethodResult, Plugin};
use emoji_picker_fonts::GlyphProbe;

use crate::checker::GlyphAvailabilityChecker;
use crate::invocation::Invocation;

/// Executes decoded invocations against a shared checker.
pub struct EmojiPickerHandler<P> {
    checker: Arc<GlyphAvailabilityChecker<P>>,
    platform_version: String,
}

impl<P: GlyphProbe> EmojiPickerHandler<P> {
    pub fn new(checker: Arc<GlyphAvailabilityChecker<P>>, platform_version: String) -> Self {
        Self {
            checker,
            platform_version,
        }
    }

    /// Run a decoded invocation.
    pub fn execute(&self, invocation: Invocation) -> MethodResult {
        match invocation {
            Invocation::IsAvailable { emoji } => {
                MethodResult::success(self.checker.is_available(&emoji))
            }
            Invocation::CheckAvailability { emoji } => {
                MethodResult::success(self.checker.check_availability(emoji))
            }
            Invocation::GetPlatformVersion => MethodResult::success(&self.platform_version),
        }
    }
}

impl<P: GlyphProbe> MethodCallHandler for EmojiPickerHandler<P> {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult {
        match Invocation::parse(call) {
            Ok(Some(invocation)) => self.execute(invocation),
            Ok(None) => {
                log::debug!("Not implemented: {}", call.method);
                MethodResult::NotImplemented
            }
            Err(e) => {
                log::warn!("{e}");
                MethodResult::invalid_params(e.to_string())
            }
        }
    }
}

/// Binds an [`EmojiPickerHandler`] to a channel while attached.
pub struct EmojiPickerPlugin<P> {
    /// Released on detach
    checker: Option<Arc<GlyphAvailabilityChecker<P>>>,
    platform_version: String,
}

impl<P: GlyphProbe + 'static> EmojiPickerPlugin<P> {
    pub fn new(checker: GlyphAvailabilityChecker<P>, platform_version: impl Into<String>) -> Self {
        Self {
            checker: Some(Arc::new(checker)),
            platform_version: platform_version.into(),
        }
    }

    /// Whether the plugin still holds its checker.
    pub fn is_holding_checker(&self) -> bool {
        self.checker.is_some()
    }
}

impl<P: GlyphProbe + 'static> Plugin for EmojiPickerPlugin<P> {
    fn on_attached(&mut self, channel: &mut MethodChannel) {
        match &self.checker {
            Some(checker) => {
                let handler = EmojiPickerHandler::new(Arc::clone(checker), self.platform_version.clone());
                channel.set_method_call_handler(Some(Box::new(handler)));
                log::info!("Attached to channel '{}'", channel.name());
            }
            None => log::warn!(
                "Plugin was already detached; not binding channel '{}'",
                channel.name()
            ),
        }
    }

    fn on_detached(&mut self, channel: &mut MethodChannel) {
        channel.set_method_call_handler(None);
        self.checker = None;
        log::info!("Detached from channel '{}'", channel.name());
    }
}
