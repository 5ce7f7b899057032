mod config;
mod entrypoint;
mod model;
mod service;

use common::utility::create_shutdown_channel;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_line_number(true)
        .with_file(true)
        .init();
    let shutdown_receiver = create_shutdown_channel().await;
    entrypoint::run(config::GameConfig::from_env(), shutdown_receiver).await;
}
