//! Plugin lifecycle seam.

use crate::channel::MethodChannel;

/// A component that binds itself to a [`MethodChannel`] while attached.
///
/// `on_attached` is expected to bind a handler; `on_detached` to unbind it
/// and drop anything the plugin was holding for it.
pub trait Plugin {
    fn on_attached(&mut self, channel: &mut MethodChannel);
    fn on_detached(&mut self, channel: &mut MethodChannel);
}
