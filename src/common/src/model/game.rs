use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    NoMove,
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::NoMove, Move::Rock, Move::Paper, Move::Scissors];

    /// The three moves a player can actually throw.
    pub const PLAYABLE: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Fixed beats-relation. NoMove beats nothing and is beaten by nothing.
    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::NoMove => "no move",
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        write!(f, "{}", name)
    }
}

/// Result of a round, from the player's perspective.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
    Undetermined,
}

impl Outcome {
    /// The same round seen from the other side of the table.
    pub fn invert(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            other => other,
        }
    }
}

/// Resolve a round. Total over all sixteen move pairs: identical moves draw
/// (even two NoMoves), and a differing pair with no beats-relation between
/// them (one side never moved) is Undetermined rather than an error.
pub fn resolve(opponent: Move, player: Move) -> Outcome {
    if opponent == player {
        return Outcome::Draw;
    }
    if player.beats(&opponent) {
        Outcome::Win
    } else if opponent.beats(&player) {
        Outcome::Lose
    } else {
        Outcome::Undetermined
    }
}
