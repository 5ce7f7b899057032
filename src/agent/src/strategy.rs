use common::model::game::{Move, Outcome};
use rand::Rng;

/// One completed round, recorded from this agent's perspective.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub my_move: Move,
    pub their_move: Move,
    pub outcome: Outcome,
}

pub trait Strategy: Send {
    fn make_move(&self, history: &[Round]) -> Move;
}

/// Always throws the same move.
pub struct Constant(pub Move);
impl Strategy for Constant {
    fn make_move(&self, _: &[Round]) -> Move {
        self.0
    }
}

/// Uniformly random among the playable moves.
pub struct Uniform;
impl Strategy for Uniform {
    fn make_move(&self, _: &[Round]) -> Move {
        let mut rng = rand::thread_rng();
        Move::PLAYABLE[rng.gen_range(0..Move::PLAYABLE.len())]
    }
}

/// Throws whatever beats the other side's previous move, random when there is
/// no previous move to counter.
pub struct Counter;
impl Strategy for Counter {
    fn make_move(&self, history: &[Round]) -> Move {
        let Some(last) = history.last() else {
            return Uniform.make_move(history);
        };
        match Move::PLAYABLE.into_iter().find(|m| m.beats(&last.their_move)) {
            Some(counter_move) => counter_move,
            // Previous round had no real move to counter
            None => Uniform.make_move(history),
        }
    }
}

/// Strategy lookup by configuration name.
pub fn from_name(name: &str) -> Option<Box<dyn Strategy>> {
    match name.to_ascii_lowercase().as_str() {
        "uniform" | "random" => Some(Box::new(Uniform)),
        "counter" => Some(Box::new(Counter)),
        "rock" => Some(Box::new(Constant(Move::Rock))),
        "paper" => Some(Box::new(Constant(Move::Paper))),
        "scissors" => Some(Box::new(Constant(Move::Scissors))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(my_move: Move, their_move: Move, outcome: Outcome) -> Round {
        Round {
            my_move,
            their_move,
            outcome,
        }
    }

    #[test]
    fn constant_returns_its_move() {
        for m in Move::PLAYABLE {
            assert_eq!(Constant(m).make_move(&[]), m);
        }
    }

    #[test]
    fn uniform_only_throws_playable_moves() {
        for _ in 0..100 {
            assert!(Move::PLAYABLE.contains(&Uniform.make_move(&[])));
        }
    }

    #[test]
    fn counter_beats_previous_move() {
        let cases = [
            (Move::Rock, Move::Paper),
            (Move::Paper, Move::Scissors),
            (Move::Scissors, Move::Rock),
        ];
        for (previous, expected) in cases {
            let history = [round(Move::Rock, previous, Outcome::Draw)];
            assert_eq!(Counter.make_move(&history), expected);
        }
    }

    #[test]
    fn counter_falls_back_without_a_move_to_counter() {
        assert!(Move::PLAYABLE.contains(&Counter.make_move(&[])));

        let history = [round(Move::Rock, Move::NoMove, Outcome::Undetermined)];
        assert!(Move::PLAYABLE.contains(&Counter.make_move(&history)));
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(from_name("rock").unwrap().make_move(&[]), Move::Rock);
        assert_eq!(from_name("PAPER").unwrap().make_move(&[]), Move::Paper);
        assert!(from_name("uniform").is_some());
        assert!(from_name("counter").is_some());
        assert!(from_name("mirror").is_none());
    }
}
