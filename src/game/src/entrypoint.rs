use agent::opponent::Opponent;
use agent::strategy::{self, Uniform};
use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use crate::config::{self, GameConfig};
use crate::service::console;
use crate::service::session::GameSession;

pub async fn run(config: GameConfig, mut shutdown_receiver: broadcast::Receiver<()>) {
    let strategy = strategy::from_name(&config.strategy).unwrap_or_else(|| {
        warn!(
            "Unknown strategy {:?}, falling back to uniform",
            config.strategy
        );
        Box::new(Uniform)
    });

    let (command_sender, command_receiver) = mpsc::channel(config::COMMAND_CHANNEL_CAPACITY);
    let reader_handle = tokio::spawn(console::read_commands(command_sender));

    let session = GameSession::new(Opponent::new(strategy));
    let stats = session.run(&mut shutdown_receiver, command_receiver).await;

    console::print_summary(&stats);
    reader_handle.abort();
    info!("Exited game loop");
}
