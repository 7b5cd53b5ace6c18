use anyhow::Context;
use clap::Parser;
use playprefs::config::{Config, PreferencesStore};
use playprefs::logging::init_tracing;
use playprefs::ui::runtime;
use std::path::PathBuf;

/// Terminal preferences screen for the player.
#[derive(Parser, Debug)]
#[command(name = "playprefs", version, about)]
struct Cli {
    /// Config file to read and save preferences to
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if cli.print_config {
        let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
        print!("{rendered}");
        return Ok(());
    }

    tracing::info!(path = %path.display(), "Loaded config");
    let store = PreferencesStore::new(config.preferences.clone(), path);
    runtime::run(&config, store).context("Terminal UI failed")?;
    Ok(())
}
