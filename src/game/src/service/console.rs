use common::model::game::{Move, Outcome};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;
use tracing::warn;

use crate::model::internal::{PlayerCommand, RoundResult};
use crate::service::session::SessionStats;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unrecognized command {0:?}")]
    Unrecognized(String),
}

pub fn parse_command(input: &str) -> Result<PlayerCommand, ParseCommandError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "rock" | "r" => Ok(PlayerCommand::Play(Move::Rock)),
        "paper" | "p" => Ok(PlayerCommand::Play(Move::Paper)),
        "scissors" | "s" => Ok(PlayerCommand::Play(Move::Scissors)),
        "stats" => Ok(PlayerCommand::Stats),
        "quit" | "exit" | "q" => Ok(PlayerCommand::Quit),
        other => Err(ParseCommandError::Unrecognized(other.to_string())),
    }
}

/// Forward stdin lines to the session as commands until input closes.
pub async fn read_commands(sender: Sender<PlayerCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(command) => {
                        let done = command == PlayerCommand::Quit;
                        if sender.send(command).await.is_err() || done {
                            break;
                        }
                    }
                    Err(e) => println!("{}. Enter rock, paper, or scissors.", e),
                }
            }
            Ok(None) => {
                // Input closed; tell the session we're done
                let _ = sender.send(PlayerCommand::Quit).await;
                break;
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        }
    }
}

pub fn print_prompt() {
    println!("rock, paper, or scissors?");
}

pub fn print_round(result: &RoundResult) {
    println!("Opponent played {}.", result.opponent_move);
    match result.outcome {
        Outcome::Win => println!("You Won!"),
        Outcome::Lose => println!("You Lost!"),
        Outcome::Draw => println!("Draw!"),
        Outcome::Undetermined => println!("No contest."),
    }
}

pub fn print_status(stats: &SessionStats) {
    println!(
        "Round {} | Wins: {}, Losses: {}, Draws: {} | Playtime {}",
        stats.rounds_played,
        stats.wins,
        stats.losses,
        stats.draws,
        format_playtime(stats.playtime_secs)
    );
}

pub fn print_summary(stats: &SessionStats) {
    println!("Thanks for playing!");
    print_status(stats);
}

/// H:MM:SS, hours unpadded.
pub fn format_playtime(seconds: u64) -> String {
    let (minutes, secs) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_shorthands() {
        assert_eq!(
            parse_command("rock").unwrap(),
            PlayerCommand::Play(Move::Rock)
        );
        assert_eq!(parse_command("p").unwrap(), PlayerCommand::Play(Move::Paper));
        assert_eq!(
            parse_command("  Scissors ").unwrap(),
            PlayerCommand::Play(Move::Scissors)
        );
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!(parse_command("stats").unwrap(), PlayerCommand::Stats);
        assert_eq!(parse_command("quit").unwrap(), PlayerCommand::Quit);
        assert_eq!(parse_command("EXIT").unwrap(), PlayerCommand::Quit);
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(
            parse_command("lizard"),
            Err(ParseCommandError::Unrecognized("lizard".to_string()))
        );
    }

    #[test]
    fn playtime_formatting() {
        assert_eq!(format_playtime(0), "0:00:00");
        assert_eq!(format_playtime(59), "0:00:59");
        assert_eq!(format_playtime(60), "0:01:00");
        assert_eq!(format_playtime(3600), "1:00:00");
        assert_eq!(format_playtime(3661), "1:01:01");
    }
}
