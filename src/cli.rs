//! Command-line interface for emoji-picker.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emoji_picker_config::Config;
use emoji_picker_fonts::{ProbeOptions, SystemGlyphProbe};

use crate::app;

/// emoji-picker - report whether the system fonts can render emoji
#[derive(Parser, Debug)]
#[command(name = "emoji-picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Set log level (overrides config and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the method channel over stdin/stdout (default)
    Serve,

    /// Check candidates directly and print one `<candidate>\t<bool>` line each
    Check {
        /// Emoji or other strings to check
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// List the resolved font fallback chain
    Fonts,
}

impl Cli {
    /// Load the config named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        config.context("Failed to load configuration")
    }
}

/// Run the selected subcommand and return the process exit code.
pub fn run(cli: Cli, config: &Config) -> Result<i32> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            app::serve_stdio(config);
            Ok(0)
        }
        Commands::Check { candidates } => {
            let checker = app::detect_checker(config);
            let mut stdout = std::io::stdout().lock();
            write_check_results(&mut stdout, &candidates, |c| checker.is_available(c))?;
            Ok(0)
        }
        Commands::Fonts => {
            let mut stdout = std::io::stdout().lock();
            list_fonts(&mut stdout, &app::probe_options(&config.fonts))
        }
    }
}

fn write_check_results(
    out: &mut impl Write,
    candidates: &[String],
    is_available: impl Fn(&str) -> bool,
) -> Result<()> {
    for candidate in candidates {
        writeln!(out, "{}\t{}", candidate, is_available(candidate))?;
    }
    Ok(())
}

fn list_fonts(out: &mut impl Write, options: &ProbeOptions) -> Result<i32> {
    match SystemGlyphProbe::detect(options) {
        Ok(probe) => {
            for (idx, family) in probe.family_names().iter().enumerate() {
                writeln!(out, "{idx:>2}  {family}")?;
            }
            Ok(0)
        }
        Err(e) => {
            writeln!(out, "glyph probe unavailable: {e}")?;
            Ok(1)
        }
    }
}
