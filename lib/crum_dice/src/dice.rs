//! Crumble (CRyptographic gaMBLE)
//!
//! Non-transitive dice played against the computer, every throw settled
//! through a fair commit-reveal round.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::error::{DiceError, Result};

pub const FACES_PER_DIE: usize = 6;

/// One die: six positive faces in the order they were given
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dice {
    faces: [u32; FACES_PER_DIE],
}

impl Dice {
    pub fn new(faces: &[u32]) -> Result<Self> {
        let Ok(faces) = <[u32; FACES_PER_DIE]>::try_from(faces) else {
            return Err(DiceError::InvalidDiceSpec(format!(
                "a dice must have exactly {FACES_PER_DIE} faces, got {}",
                faces.len()
            )));
        };

        if faces.contains(&0) {
            return Err(DiceError::InvalidDiceSpec(format!(
                "faces must be positive integers, got {}",
                faces.iter().join(",")
            )));
        }

        Ok(Self { faces })
    }

    pub const fn get_faces(&self) -> &[u32; FACES_PER_DIE] {
        &self.faces
    }

    pub fn get_face(&self, index: usize) -> Option<u32> {
        self.faces.get(index).copied()
    }
}

impl FromStr for Dice {
    type Err = DiceError;

    /// Parses `"2,2,4,4,9,9"`
    fn from_str(s: &str) -> Result<Self> {
        let faces = s
            .split(',')
            .map(|face| face.trim().parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| {
                DiceError::InvalidDiceSpec(format!(
                    "`{s}` is not a comma separated list of positive integers"
                ))
            })?;

        Self::new(&faces)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.faces.iter().join(","))
    }
}
