//! pathviz: paint a grid in the terminal and watch A* or Dijkstra search it.

mod app;
mod config;
mod layout;
mod palette;
mod view;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use pathviz_crossterm::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;
use config::Config;

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install logger: {e}"))
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate()?;
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }

    let mut app = App::new(config);
    let mut term = Terminal::new();
    term.init().context("cannot initialise terminal")?;
    let result = app.run(&mut term);
    term.close();
    result.context("terminal i/o failed")
}
