//! Terminal front end for the medical terminology study aid.

pub mod app;
pub mod config;
pub mod db;
pub mod screens;

use anyhow::Context;
use app::App;
use config::AppConfig;
use db::SqliteRepository;
use screens::Terminal;
use std::io;
use terminology_core::deck::filter_sections;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // Logs go to stderr so they stay out of the screens on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let content = std::fs::read_to_string(&config.source_path)
        .with_context(|| format!("failed to read {}", config.source_path.display()))?;
    let cards = terminology_core::parse(&content);
    let cards = filter_sections(&cards, &config.sections)?;
    tracing::info!(
        cards = cards.len(),
        source = %config.source_path.display(),
        "loaded terminology"
    );

    // Ensure data directory exists
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let history = SqliteRepository::open(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;

    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());
    App::new(cards, history, config.study, terminal).run()?;
    Ok(())
}
