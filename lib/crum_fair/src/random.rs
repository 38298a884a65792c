//! Crumble (CRyptographic gaMBLE)
//!
//! Provably fair random numbers: HMAC-SHA3 commit-reveal between two parties.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use digest::Digest;
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use sha3::Sha3_256;

use crate::{
    error::{FairError, Result},
    types::SecretKey,
};

/// Largest value the sampler draws; 63 bits of entropy per draw
const SAMPLE_MAX: u64 = i64::MAX as u64;

/// Uniform integers and key material from a cryptographically secure source.
///
/// Every draw goes through `try_fill_bytes`, so an exhausted or broken
/// source is reported as [`FairError::EntropyUnavailable`] instead of
/// silently degrading.
pub struct SecureRandom<R = OsRng> {
    rng: R,
}

impl SecureRandom<OsRng> {
    pub const fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for SecureRandom<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecureRandom<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|err| FairError::EntropyUnavailable(err.to_string()))
    }

    fn next_sample(&mut self) -> Result<u64> {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes) & SAMPLE_MAX)
    }

    /// Draws an integer uniformly from `[min, max)`.
    ///
    /// Samples landing in the top incomplete band of the modulus are
    /// rejected and redrawn, so no residue is favoured by the reduction.
    pub fn uniform(&mut self, min: i64, max: i64) -> Result<i64> {
        if max <= min {
            return Err(FairError::EmptyRange { min, max });
        }

        let range = max.abs_diff(min);
        if range > SAMPLE_MAX {
            return Err(FairError::RangeTooWide { min, max });
        }

        let limit = SAMPLE_MAX - SAMPLE_MAX % range;
        let value = loop {
            let value = self.next_sample()?;
            if value < limit {
                break value;
            }
        };

        Ok(min + (value % range) as i64)
    }

    /// Uniform index into a collection of `len` items
    pub fn choose_index(&mut self, len: usize) -> Result<usize> {
        let len = i64::try_from(len).map_err(|_| FairError::RangeTooWide {
            min: 0,
            max: i64::MAX,
        })?;
        Ok(self.uniform(0, len)? as usize)
    }

    /// Draws `length` secure bytes and hands out their SHA3-256 digest.
    ///
    /// The key is always 32 bytes; `length` only sets how much raw
    /// material feeds the hash.
    pub fn new_secret_key(&mut self, length: usize) -> Result<SecretKey> {
        let mut material = vec![0u8; length];
        self.fill(&mut material)?;
        Ok(Sha3_256::digest(&material).into())
    }
}
