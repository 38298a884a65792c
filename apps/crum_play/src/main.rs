//! Crumble (CRyptographic gaMBLE)
//!
//! Non-transitive dice played against the computer, every throw settled
//! through a fair HMAC-SHA3 commit-reveal round the player can check.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

mod console;
mod table;


use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use crum_dice::{
    DiceError,
    dice_match::{DiceMatch, FIRST_MOVE_RANGE, MatchOutcome, THROW_OFFSET_RANGE},
    dice_set::DiceSet,
    dice_state::{DiceMatchStateEnum, Player},
    probability::ProbabilityTable,
};
use crum_fair::{
    FairCommitment, FairError, FairPlay,
    types::{OFFSET_LOWER_BOUND, SELECTION_LOWER_BOUND},
    verify::verify_commitment,
};
use itertools::Itertools;
use thiserror::Error;

use crate::{
    console::{Command, Console},
    table::render_help_table,
};

const USAGE_EXAMPLE: &str = "crum_play 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3";

#[derive(Parser, Debug)]
#[command(version, about = "Provably fair dice duel against the computer")]
struct Args {
    /// Dice to play with: at least three, six comma separated positive
    /// integers each
    #[arg(value_name = "DICE", allow_hyphen_values = true)]
    dice: Vec<String>,
}

#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    Dice(#[from] DiceError),

    #[error(transparent)]
    Fair(#[from] FairError),

    #[error("console error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum GameEnd {
    Finished(MatchOutcome),
    Quit,
}

fn parse_in_range(answer: &str, lower: i64, upper: i64) -> Option<i64> {
    answer
        .parse::<i64>()
        .ok()
        .filter(|value| (lower..upper).contains(value))
}

fn number_options(lower: i64, upper: i64) -> Vec<String> {
    (lower..upper).map(|i| format!("[{i}]: {i}")).collect()
}

fn show_reveal(commitment: &FairCommitment) {
    let reveal = commitment.reveal();
    tracing::info!("My number is: {}", reveal.number);
    tracing::info!("Secret key: {}", reveal.key_hex());
}

/// Recomputes the MAC shown before the player answered. Any mismatch ends
/// the game.
fn verify_round(shown_mac: &str, commitment: &FairCommitment) -> Result<(), FairError> {
    let reveal = commitment.reveal();
    verify_commitment(
        shown_mac,
        commitment.get_lower(),
        commitment.get_range(),
        &reveal,
    )?;
    tracing::info!(
        "Verified: HMAC-SHA3-256(secret key, \"{}\") = {}",
        reveal.message(),
        shown_mac
    );
    Ok(())
}

fn farewell() -> GameEnd {
    tracing::info!("Thanks for playing!");
    GameEnd::Quit
}

pub fn run(dice: DiceSet, input: impl BufRead) -> Result<GameEnd, PlayError> {
    let help = render_help_table(&ProbabilityTable::new(&dice));
    let mut console = Console::new(input, help);
    let mut game = DiceMatch::new(dice, FairPlay::new())?;

    tracing::info!("Welcome to the Dice Game!");

    loop {
        match game.get_current_state().to_enum() {
            DiceMatchStateEnum::FirstMove => {
                let Some(mac) = game.get_pending_mac().map(str::to_owned) else {
                    return Err(DiceError::WrongState("No first move committed"))?;
                };
                tracing::info!(
                    "I selected a random number between {} and {}",
                    SELECTION_LOWER_BOUND,
                    FIRST_MOVE_RANGE - 1
                );
                tracing::info!("Computer's HMAC: {}", mac);
                tracing::info!("Try to guess my selection");

                let options = number_options(SELECTION_LOWER_BOUND, FIRST_MOVE_RANGE);
                let Command::Value(guess) =
                    console.ask("Select a number between 0 and 2:", &options, |answer| {
                        parse_in_range(answer, SELECTION_LOWER_BOUND, FIRST_MOVE_RANGE)
                    })?
                else {
                    return Ok(farewell());
                };

                let outcome = game.submit_guess(guess)?;
                show_reveal(&outcome.commitment);
                verify_round(&mac, &outcome.commitment)?;
                match outcome.first_player {
                    Player::User => tracing::info!("You guessed right, you are first to choose!"),
                    Player::Computer => tracing::info!("You guessed wrong, I choose first"),
                }
            }
            DiceMatchStateEnum::UserSelect => {
                let remaining = game.get_remaining_dice();
                let len = remaining.len();
                let options = remaining
                    .iter()
                    .enumerate()
                    .map(|(i, d)| format!("[{i}]: {d}"))
                    .collect_vec();

                let Command::Value(index) = console.ask("Choose your dice:", &options, |answer| {
                    answer.parse::<usize>().ok().filter(|index| *index < len)
                })?
                else {
                    return Ok(farewell());
                };

                let dice = game.submit_user_dice(index)?;
                tracing::info!("You choose: {}", index);
                tracing::info!("Your dice: {}", dice);
            }
            DiceMatchStateEnum::ComputerSelect => {
                let dice = game.submit_computer_dice()?;
                tracing::info!("I choose the dice: {}", dice);
            }
            DiceMatchStateEnum::Throw { thrower } => {
                match thrower {
                    Player::Computer => tracing::info!("It's time for my throw"),
                    Player::User => tracing::info!("It's time for your throw"),
                }
                tracing::info!(
                    "I selected a random number in the range {} to {}",
                    OFFSET_LOWER_BOUND,
                    THROW_OFFSET_RANGE - 1
                );
                let mac = game.begin_throw()?.to_owned();
                tracing::info!("Computer's HMAC: {}", mac);

                let options = number_options(OFFSET_LOWER_BOUND, THROW_OFFSET_RANGE);
                let Command::Value(user_value) =
                    console.ask("Add your number for modulo 6:", &options, |answer| {
                        parse_in_range(answer, OFFSET_LOWER_BOUND, THROW_OFFSET_RANGE)
                    })?
                else {
                    return Ok(farewell());
                };

                let throw = game.submit_throw(user_value)?.clone();
                tracing::info!("You chose number: {}", user_value);
                show_reveal(&throw.commitment);
                tracing::info!(
                    "The result is: {} + {} = {} (Modulo 6)",
                    user_value,
                    throw.computer_value(),
                    throw.face_index
                );
                verify_round(&mac, &throw.commitment)?;
                match thrower {
                    Player::Computer => tracing::info!("My throw is: {}", throw.face),
                    Player::User => tracing::info!("Your throw is: {}", throw.face),
                }
            }
            DiceMatchStateEnum::Finished => {
                let Some(outcome) = game.get_outcome() else {
                    return Err(DiceError::WrongState("Match finished without both throws"))?;
                };
                match outcome {
                    MatchOutcome::UserWins {
                        user_face,
                        computer_face,
                    } => tracing::info!("You win! ({} > {})", user_face, computer_face),
                    MatchOutcome::ComputerWins {
                        user_face,
                        computer_face,
                    } => tracing::info!("You lose! ({} > {})", computer_face, user_face),
                    MatchOutcome::Draw { face } => {
                        tracing::info!("It's a draw! ({} = {})", face, face)
                    }
                }
                return Ok(GameEnd::Finished(outcome));
            }
            DiceMatchStateEnum::Invalid => {
                return Err(DiceError::WrongState("Invalid match state"))?;
            }
        }
    }
}

fn init_logging() {
    if cfg!(feature = "pure_output") {
        tracing_subscriber::fmt()
            .with_target(false) // Removes "crum_play:"
            .with_level(false) // Removes "INFO"
            .without_time() // Removes the timestamp
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }
}

pub fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    let dice = match DiceSet::parse(&args.dice) {
        Ok(dice) => dice,
        Err(err) => {
            tracing::error!("Error: {}", err);
            tracing::info!("Input values example: {}", USAGE_EXAMPLE);
            return ExitCode::FAILURE;
        }
    };

    match run(dice, io::stdin().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(PlayError::Fair(err @ FairError::CommitmentMismatch { .. })) => {
            tracing::error!("Verification failed, the computer cheated: {}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
