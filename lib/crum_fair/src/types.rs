//! Crumble (CRyptographic gaMBLE)
//!
//! Provably fair random numbers: HMAC-SHA3 commit-reveal between two parties.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

pub const SECRET_KEY_LEN: usize = 32;
pub const MAC_HEX_LEN: usize = 64;

/// Lower bound used when choosing who moves first
pub const SELECTION_LOWER_BOUND: i64 = 0;
/// Lower bound used for the per-throw modulo contribution
pub const OFFSET_LOWER_BOUND: i64 = 2;

pub type SecretKey = [u8; SECRET_KEY_LEN];
