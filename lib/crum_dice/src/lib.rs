//! Crumble (CRyptographic gaMBLE)
//!
//! Non-transitive dice played against the computer, every throw settled
//! through a fair commit-reveal round.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

pub mod dice;
pub mod dice_match;
pub mod dice_set;
pub mod dice_state;
pub mod error;
pub mod probability;

pub use error::{DiceError, Result};

#[cfg(test)]
pub mod tests;
