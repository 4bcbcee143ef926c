//! Post board server entry point.

use anyhow::Context;
use clap::Parser;
use log::info;
use postboard_core::db::{open_db, open_db_in_memory};
use postboard_core::init_logging;
use postboard_server::{serve, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let log_dir = config.log_dir();
    init_logging(config.log_level(), &log_dir.to_string_lossy()).map_err(anyhow::Error::msg)?;

    let conn = match &config.db_path {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open database `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory database")?,
    };

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind `{}`", config.bind))?;
    info!(
        "event=server_start module=http status=ok bind={} version={}",
        config.bind,
        postboard_core::core_version()
    );

    serve(listener, AppState::new(conn)).await
}
