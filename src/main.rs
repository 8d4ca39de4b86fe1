use anyhow::Result;
use clap::Parser;
use emoji_picker::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config.
    emoji_picker::debug::init_log_bridge(
        cli.log_level.map(|l| l.to_level_filter()),
        config.log_level.to_level_filter(),
    );
    log::info!("Starting emoji-picker v{}", emoji_picker::VERSION);

    let code = cli::run(cli, &config)?;
    log::logger().flush();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
