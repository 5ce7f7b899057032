use std::{env, time::Duration};

pub const COMMAND_CHANNEL_CAPACITY: usize = 100;
pub const PLAYTIME_TICK: Duration = Duration::from_secs(1);

pub struct GameConfig {
    pub strategy: String,
}

impl GameConfig {
    pub fn from_env() -> Self {
        GameConfig {
            strategy: env::var("OPPONENT_STRATEGY").unwrap_or_else(|_| "uniform".to_string()),
        }
    }
}
