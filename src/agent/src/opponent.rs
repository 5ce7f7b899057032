use common::model::game::{Move, Outcome};
use tracing::debug;

use crate::strategy::{Round, Strategy};

pub struct Opponent {
    strategy: Box<dyn Strategy>,
    history: Vec<Round>,
    last_move: Option<Move>,
}

impl Opponent {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Opponent {
            strategy,
            history: Vec::new(),
            last_move: None,
        }
    }

    /// Pick a move for the coming round. The move is held until the round is
    /// observed so it can be written into the history.
    pub fn play(&mut self) -> Move {
        let next_move = self.strategy.make_move(&self.history);
        debug!("Opponent chose {:?}", next_move);
        self.last_move = Some(next_move);
        next_move
    }

    /// Record a finished round. `outcome` is from this opponent's perspective.
    pub fn observe(&mut self, their_move: Move, outcome: Outcome) {
        if let Some(my_move) = self.last_move.take() {
            self.history.push(Round {
                my_move,
                their_move,
                outcome,
            });
        }
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }
}
