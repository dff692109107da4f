use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use newsflow::app::{App, AppEvent};
use newsflow::config::Config;
use newsflow::news::Category;
use newsflow::ui;

/// Get the config directory path (~/.config/newsflow/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("newsflow"))
}

#[derive(Parser, Debug)]
#[command(name = "newsflow", about = "Terminal live news ticker")]
struct Args {
    /// Config file (defaults to ~/.config/newsflow/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Starting category filter (e.g. Tech, Game, Semua)
    #[arg(long, value_name = "NAME")]
    category: Option<String>,

    /// Theme: dark or light
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Milliseconds between ticker emissions
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Simulated detail fetch latency in milliseconds
    #[arg(long, value_name = "MS")]
    detail_delay_ms: Option<u64>,
}

impl Args {
    /// Overlay CLI flags onto the loaded config.
    fn apply(self, mut config: Config) -> Result<Config> {
        if let Some(name) = self.category {
            let category = Category::from_label(&name)
                .with_context(|| format!("Unknown category \"{}\"", name))?;
            config.initial_category = category.label().to_string();
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(ms) = self.tick_ms {
            config.tick_interval_ms = ms;
        }
        if let Some(ms) = self.detail_delay_ms {
            config.detail_delay_ms = ms;
        }
        config.validate().context("Invalid command-line options")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let config = args.apply(config)?;

    tracing::info!(
        category = %config.initial_category(),
        tick_interval_ms = config.tick_interval_ms,
        "Starting newsflow"
    );

    let mut app = App::new(&config);

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Sampai jumpa! {} berita dibaca.", app.read_count());
    Ok(())
}
