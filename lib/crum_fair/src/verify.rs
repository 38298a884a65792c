/// Counter-party checks run after a reveal
use crate::{
    commit::Reveal,
    error::{FairError, Result},
    mac::hmac_hex,
};

/// Recomputes the MAC from the revealed key and number and compares it to
/// the MAC shown before the reveal. A mismatch means the committer changed
/// its number after the fact.
pub fn verify_reveal(mac: &str, reveal: &Reveal) -> Result<()> {
    let actual = hmac_hex(&reveal.key, &reveal.message());
    if actual != mac {
        return Err(FairError::CommitmentMismatch {
            expected: mac.to_string(),
            actual,
        });
    }
    Ok(())
}

pub fn verify_in_range(lower: i64, range: i64, reveal: &Reveal) -> Result<()> {
    if !(lower..range).contains(&reveal.number) {
        return Err(FairError::OutOfRange {
            number: reveal.number,
            lower,
            range,
        });
    }
    Ok(())
}

/// Full check of a reveal against what was announced for the round
pub fn verify_commitment(mac: &str, lower: i64, range: i64, reveal: &Reveal) -> Result<()> {
    verify_reveal(mac, reveal)?;
    verify_in_range(lower, range, reveal)
}
