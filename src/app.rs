//! Wiring between configuration, the glyph probe, the plugin and a channel.

use std::io::{BufRead, Write};

use emoji_picker_channel::{MethodChannel, Plugin, ServeSummary};
use emoji_picker_config::{Config, FontConfig};
use emoji_picker_fonts::{GlyphProbe, ProbeOptions, SystemGlyphProbe};

use crate::checker::GlyphAvailabilityChecker;
use crate::plugin::EmojiPickerPlugin;

/// Probe settings derived from the `fonts` config section.
pub fn probe_options(fonts: &FontConfig) -> ProbeOptions {
    ProbeOptions {
        use_system_fonts: fonts.use_system_fonts,
        font_dirs: fonts.font_dirs.clone(),
        preferred_families: fonts.preferred_families.clone(),
        cache_size: fonts.cache_size,
    }
}

/// Detect the system probe once and wrap it in a checker.
pub fn detect_checker(config: &Config) -> GlyphAvailabilityChecker<SystemGlyphProbe> {
    let options = probe_options(&config.fonts);
    GlyphAvailabilityChecker::detect(|| SystemGlyphProbe::detect(&options))
}

/// Attach `plugin` to a fresh channel, serve until input closes, then detach.
pub fn run_channel<P, R, W>(
    channel_name: &str,
    plugin: &mut EmojiPickerPlugin<P>,
    reader: R,
    writer: &mut W,
) -> ServeSummary
where
    P: GlyphProbe + 'static,
    R: BufRead,
    W: Write,
{
    let mut channel = MethodChannel::new(channel_name);
    plugin.on_attached(&mut channel);
    let summary = channel.serve(reader, writer);
    plugin.on_detached(&mut channel);
    log::info!(
        "Channel '{}' closed: {} responses, {} notifications, {} parse errors",
        channel_name,
        summary.responses,
        summary.notifications,
        summary.parse_errors
    );
    summary
}

/// Serve the configured channel over stdio with the system probe.
pub fn serve_stdio(config: &Config) -> ServeSummary {
    let mut plugin = EmojiPickerPlugin::new(detect_checker(config), crate::platform::platform_version());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_channel(&config.channel_name, &mut plugin, stdin.lock(), &mut stdout)
}
