//! Logging bridge for emoji-picker.
//!
//! Routes `log::info!()` and friends to stderr, one timestamped line per
//! record. Stdout is reserved for the method channel, so nothing else may
//! write there.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG` (a bare level such as
//! `debug`), then the config file's `log_level`.

use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

/// Stderr-backed `log::Log` implementation.
struct LogBridge {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let mut sink = self.sink.lock();
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_record(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, msg)
}

/// Pick the effective level from the three sources, highest precedence first.
pub fn resolve_level(
    cli_level: Option<LevelFilter>,
    rust_log: Option<&str>,
    config_level: LevelFilter,
) -> LevelFilter {
    cli_level
        .or_else(|| rust_log.and_then(|v| LevelFilter::from_str(v.trim()).ok()))
        .unwrap_or(config_level)
}

/// Install the bridge as the global logger. Calling it again only updates the
/// max level.
pub fn init_log_bridge(cli_level: Option<LevelFilter>, config_level: LevelFilter) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref(), config_level);

    let logger = LOGGER.get_or_init(|| LogBridge {
        sink: Mutex::new(Box::new(std::io::stderr())),
    });
    // Err only means a logger is already installed
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}
