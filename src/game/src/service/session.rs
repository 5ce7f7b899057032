use agent::opponent::Opponent;
use common::model::game::{resolve, Move, Outcome};
use serde::Serialize;
use tokio::sync::{broadcast, mpsc::Receiver};
use tokio::time;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config;
use crate::model::internal::{PlayerCommand, RoundResult};
use crate::service::console;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub playtime_secs: u64,
}

impl SessionStats {
    /// Count a finished round. An Undetermined round is counted as played
    /// but decides nothing.
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds_played += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undetermined => {
                warn!("Round ended without a real move on both sides");
            }
        }
    }
}

pub struct GameSession {
    id: Uuid,
    opponent: Opponent,
    stats: SessionStats,
}

impl GameSession {
    pub fn new(opponent: Opponent) -> Self {
        let id = Uuid::new_v4();
        info!("Starting session {}", id);
        GameSession {
            id,
            opponent,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Run rounds until the player quits, input closes, or shutdown fires.
    pub async fn run(
        mut self,
        shutdown_receiver: &mut broadcast::Receiver<()>,
        mut commands: Receiver<PlayerCommand>,
    ) -> SessionStats {
        console::print_prompt();
        let mut interval = time::interval(config::PLAYTIME_TICK);
        interval.tick().await; // first tick completes immediately
        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    if self.handle(command) {
                        break;
                    }
                }
                _ = interval.tick() => {
                    self.stats.playtime_secs += 1;
                }
                _ = shutdown_receiver.recv() => {
                    break;
                }
            }
        }
        info!(
            "Session {} over after {} rounds",
            self.id, self.stats.rounds_played
        );
        self.stats
    }

    // Returns true once the session is over.
    fn handle(&mut self, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::Play(player_move) => {
                let result = self.play_round(player_move);
                console::print_round(&result);
                console::print_status(&self.stats);
                console::print_prompt();
            }
            PlayerCommand::Stats => {
                console::print_status(&self.stats);
            }
            PlayerCommand::Quit => return true,
        }
        false
    }

    /// Play a single round: draw the opponent's move, resolve, record both sides.
    pub fn play_round(&mut self, player_move: Move) -> RoundResult {
        let opponent_move = self.opponent.play();
        let outcome = resolve(opponent_move, player_move);
        self.opponent.observe(player_move, outcome.invert());
        self.stats.record(outcome);
        debug!(
            "Session {} round {}: opponent played {:?}, player played {:?}, outcome {:?}",
            self.id, self.stats.rounds_played, opponent_move, player_move, outcome
        );
        RoundResult {
            outcome,
            opponent_move,
        }
    }
}
