use common::model::game::{Move, Outcome};
use serde::Serialize;

// Types
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub opponent_move: Move,
}

// Messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play(Move),
    Stats,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_result_wire_shape() {
        let result = RoundResult {
            outcome: Outcome::Win,
            opponent_move: Move::Scissors,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"outcome":"Win","opponent_move":"Scissors"}"#
        );
    }
}
