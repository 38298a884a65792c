//! Crumble (CRyptographic gaMBLE)
//!
//! Non-transitive dice played against the computer, every throw settled
//! through a fair commit-reveal round.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::cmp::Ordering;

use crum_fair::{FairCommitment, FairPlay, Reveal, types::OFFSET_LOWER_BOUND};
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use crate::{
    dice::{Dice, FACES_PER_DIE},
    dice_set::{DiceSet, MIN_DICE},
    dice_state::{DiceMatchState, DiceMatchStateEnum, Player},
    error::{DiceError, Result},
};

/// Exclusive bound of the number guessed to decide who picks first
pub const FIRST_MOVE_RANGE: i64 = 3;
/// Exclusive bound of the numbers added together for a throw
pub const THROW_OFFSET_RANGE: i64 = 8;

/// Guess against the computer's hidden number, revealed afterwards
#[derive(Clone, Debug)]
pub struct FirstMoveOutcome {
    pub commitment: FairCommitment,
    pub guess: i64,
    pub first_player: Player,
}

impl FirstMoveOutcome {
    pub fn reveal(&self) -> Reveal {
        self.commitment.reveal()
    }
}

/// One throw: both numbers summed modulo 6 select the face
#[derive(Clone, Debug)]
pub struct ThrowOutcome {
    pub thrower: Player,
    pub commitment: FairCommitment,
    pub user_value: i64,
    pub face_index: usize,
    pub face: u32,
}

impl ThrowOutcome {
    pub fn reveal(&self) -> Reveal {
        self.commitment.reveal()
    }

    pub fn computer_value(&self) -> i64 {
        self.reveal().number
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    UserWins { user_face: u32, computer_face: u32 },
    ComputerWins { user_face: u32, computer_face: u32 },
    Draw { face: u32 },
}

pub struct DiceMatch<R = OsRng> {
    fair: FairPlay<R>,
    remaining_dice: DiceSet,
    user_dice: Option<Dice>,
    computer_dice: Option<Dice>,
    pending: Option<FairCommitment>,
    throws: Vec<ThrowOutcome>,
    current_state: DiceMatchState,
}

impl<R: RngCore + CryptoRng> DiceMatch<R> {
    /// Sets the table and commits to the number deciding who picks first
    pub fn new(dice: DiceSet, mut fair: FairPlay<R>) -> Result<Self> {
        if dice.len() < MIN_DICE {
            return Err(DiceError::InvalidDiceSpec(format!(
                "the number of dice must be at least {MIN_DICE}, got {}",
                dice.len()
            )));
        }

        let pending = fair.generate_fair_number(FIRST_MOVE_RANGE)?;

        Ok(Self {
            fair,
            remaining_dice: dice,
            user_dice: None,
            computer_dice: None,
            pending: Some(pending),
            throws: vec![],
            current_state: DiceMatchState::new(),
        })
    }

    pub const fn get_current_state(&self) -> &DiceMatchState {
        &self.current_state
    }

    /// MAC of the round waiting for the user's input, if any
    pub fn get_pending_mac(&self) -> Option<&str> {
        self.pending.as_ref().map(|c| c.get_mac())
    }

    pub const fn get_remaining_dice(&self) -> &DiceSet {
        &self.remaining_dice
    }

    pub const fn get_user_dice(&self) -> Option<&Dice> {
        self.user_dice.as_ref()
    }

    pub const fn get_computer_dice(&self) -> Option<&Dice> {
        self.computer_dice.as_ref()
    }

    pub fn get_throws(&self) -> &[ThrowOutcome] {
        &self.throws
    }

    fn get_throw(&self, thrower: Player) -> Option<&ThrowOutcome> {
        self.throws.iter().find(|t| t.thrower == thrower)
    }

    /// User guesses the committed number; a correct guess picks first
    pub fn submit_guess(&mut self, guess: i64) -> Result<FirstMoveOutcome> {
        let DiceMatchStateEnum::FirstMove = self.get_current_state().to_enum() else {
            return Err(DiceError::WrongState("Not deciding who moves first"));
        };

        if !(0..FIRST_MOVE_RANGE).contains(&guess) {
            return Err(DiceError::InvalidChoice {
                value: guess,
                min: 0,
                max: FIRST_MOVE_RANGE - 1,
            });
        }

        let Some(commitment) = self.pending.take() else {
            return Err(DiceError::WrongState("No first move committed"));
        };

        let first_player = if commitment.reveal().number == guess {
            Player::User
        } else {
            Player::Computer
        };
        self.current_state.start(first_player);

        Ok(FirstMoveOutcome {
            commitment,
            guess,
            first_player,
        })
    }

    fn take_dice(&mut self, index: usize) -> Result<Dice> {
        let len = self.remaining_dice.len();
        if index >= len {
            return Err(DiceError::NoSuchDice { index, len });
        }

        let (dice, remaining_dice) = std::mem::take(&mut self.remaining_dice).take(index)?;
        self.remaining_dice = remaining_dice;
        Ok(dice)
    }

    pub fn submit_user_dice(&mut self, index: usize) -> Result<&Dice> {
        let DiceMatchStateEnum::UserSelect = self.get_current_state().to_enum() else {
            return Err(DiceError::WrongState("Not your turn to choose a dice"));
        };

        let dice = self.take_dice(index)?;
        self.current_state.next_select();
        Ok(&*self.user_dice.insert(dice))
    }

    /// Computer takes a uniformly random dice from those left
    pub fn submit_computer_dice(&mut self) -> Result<&Dice> {
        let DiceMatchStateEnum::ComputerSelect = self.get_current_state().to_enum() else {
            return Err(DiceError::WrongState("Not the computer's turn to choose a dice"));
        };

        let index = self
            .fair
            .get_random_mut()
            .choose_index(self.remaining_dice.len())?;
        let dice = self.take_dice(index)?;
        self.current_state.next_select();
        Ok(&*self.computer_dice.insert(dice))
    }

    /// Commits the computer's share of the next throw and returns its MAC
    pub fn begin_throw(&mut self) -> Result<&str> {
        let DiceMatchStateEnum::Throw { .. } = self.get_current_state().to_enum() else {
            return Err(DiceError::WrongState("Not in throw state"));
        };

        if self.pending.is_some() {
            return Err(DiceError::WrongState("Throw already committed"));
        }

        let commitment = self.fair.generate_offset_number(THROW_OFFSET_RANGE)?;
        Ok(self.pending.insert(commitment).get_mac())
    }

    /// Adds the user's number to the committed one; the sum modulo 6 is
    /// the index of the face thrown
    pub fn submit_throw(&mut self, user_value: i64) -> Result<&ThrowOutcome> {
        let DiceMatchStateEnum::Throw { thrower } = self.get_current_state().to_enum() else {
            return Err(DiceError::WrongState("Not in throw state"));
        };

        if !(OFFSET_LOWER_BOUND..THROW_OFFSET_RANGE).contains(&user_value) {
            return Err(DiceError::InvalidChoice {
                value: user_value,
                min: OFFSET_LOWER_BOUND,
                max: THROW_OFFSET_RANGE - 1,
            });
        }

        let dice = match thrower {
            Player::User => self.user_dice.as_ref(),
            Player::Computer => self.computer_dice.as_ref(),
        };
        let Some(dice) = dice else {
            return Err(DiceError::WrongState("Thrower has no dice"));
        };

        let Some(commitment) = self.pending.take() else {
            return Err(DiceError::WrongState("No throw committed"));
        };

        let face_index = (user_value + commitment.reveal().number).rem_euclid(FACES_PER_DIE as i64)
            as usize;
        let Some(face) = dice.get_face(face_index) else {
            return Err(DiceError::WrongState("Face index out of range"));
        };

        self.throws.push(ThrowOutcome {
            thrower,
            commitment,
            user_value,
            face_index,
            face,
        });
        self.current_state.next_throw();

        Ok(&self.throws[self.throws.len() - 1])
    }

    /// Higher face wins; equal faces are a draw
    pub fn get_outcome(&self) -> Option<MatchOutcome> {
        if !self.current_state.is_finished() {
            return None;
        }

        let user_face = self.get_throw(Player::User)?.face;
        let computer_face = self.get_throw(Player::Computer)?.face;

        Some(match user_face.cmp(&computer_face) {
            Ordering::Greater => MatchOutcome::UserWins {
                user_face,
                computer_face,
            },
            Ordering::Less => MatchOutcome::ComputerWins {
                user_face,
                computer_face,
            },
            Ordering::Equal => MatchOutcome::Draw { face: user_face },
        })
    }
}
