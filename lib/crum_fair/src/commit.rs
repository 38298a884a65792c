//! Crumble (CRyptographic gaMBLE)
//!
//! Provably fair random numbers: HMAC-SHA3 commit-reveal between two parties.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::fmt;

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use crate::{
    error::Result,
    mac::{hmac_hex, key_hex},
    random::SecureRandom,
    types::{OFFSET_LOWER_BOUND, SECRET_KEY_LEN, SELECTION_LOWER_BOUND, SecretKey},
    verify,
};

/// Produces fresh commitments, one secret key per round
pub struct FairPlay<R = OsRng> {
    random: SecureRandom<R>,
}

impl FairPlay<OsRng> {
    pub const fn new() -> Self {
        Self::with_random(SecureRandom::new())
    }
}

impl Default for FairPlay<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> FairPlay<R> {
    pub const fn with_random(random: SecureRandom<R>) -> Self {
        Self { random }
    }

    /// Shares the secure source, e.g. for the computer's own choices
    pub fn get_random_mut(&mut self) -> &mut SecureRandom<R> {
        &mut self.random
    }

    /// Samples a number in `[lower, range)` under a brand new key and
    /// commits to it. Only the MAC may be shown before the counter-party
    /// has made their move.
    pub fn commit(&mut self, lower: i64, range: i64) -> Result<FairCommitment> {
        let key = self.random.new_secret_key(SECRET_KEY_LEN)?;
        let number = self.random.uniform(lower, range)?;
        Ok(FairCommitment::from_parts(lower, range, number, key))
    }

    /// Commitment to a number in `[0, range)`
    pub fn generate_fair_number(&mut self, range: i64) -> Result<FairCommitment> {
        self.commit(SELECTION_LOWER_BOUND, range)
    }

    /// Commitment to a number in `[2, range)`
    pub fn generate_offset_number(&mut self, range: i64) -> Result<FairCommitment> {
        self.commit(OFFSET_LOWER_BOUND, range)
    }
}

/// Number and key disclosed once the counter-party has committed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub key: SecretKey,
    pub number: i64,
}

impl Reveal {
    pub fn key_hex(&self) -> String {
        key_hex(&self.key)
    }

    /// The exact text the MAC was computed over
    pub fn message(&self) -> String {
        self.number.to_string()
    }
}

#[derive(Clone)]
pub struct FairCommitment {
    lower: i64,
    range: i64,
    number: i64,
    key: SecretKey,
    mac: String,
}

impl FairCommitment {
    pub fn from_parts(lower: i64, range: i64, number: i64, key: SecretKey) -> Self {
        let mac = hmac_hex(&key, &number.to_string());
        Self {
            lower,
            range,
            number,
            key,
            mac,
        }
    }

    /// Safe to publish immediately
    pub fn get_mac(&self) -> &str {
        &self.mac
    }

    pub const fn get_lower(&self) -> i64 {
        self.lower
    }

    pub const fn get_range(&self) -> i64 {
        self.range
    }

    /// Always the same pair; revealing never draws new randomness
    pub fn reveal(&self) -> Reveal {
        Reveal {
            key: self.key,
            number: self.number,
        }
    }

    pub fn verify(&self, reveal: &Reveal) -> Result<()> {
        verify::verify_commitment(&self.mac, self.lower, self.range, reveal)
    }
}

impl fmt::Debug for FairCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FairCommitment")
            .field("lower", &self.lower)
            .field("range", &self.range)
            .field("mac", &self.mac)
            .finish_non_exhaustive()
    }
}
