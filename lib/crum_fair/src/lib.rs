//! Crumble (CRyptographic gaMBLE)
//!
//! Provably fair random numbers: HMAC-SHA3 commit-reveal between two parties.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

pub mod commit;
pub mod error;
pub mod mac;
pub mod random;
pub mod types;
pub mod verify;

pub use commit::{FairCommitment, FairPlay, Reveal};
pub use error::{FairError, Result};
