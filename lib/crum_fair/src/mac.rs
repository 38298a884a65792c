/// HMAC-SHA3-256 tags over decimal numbers
use hmac::{Hmac, Mac};
use sha3::Sha3_256;

type HmacSha3_256 = Hmac<Sha3_256>;

/// Uppercase hex of raw key bytes, as shown to the player at reveal time
pub fn key_hex(key: &[u8]) -> String {
    hex::encode_upper(key)
}

/// Computes the uppercase hex HMAC-SHA3-256 of `message`.
///
/// The MAC is keyed with the ASCII text of `key_hex(key)`, not the raw key
/// bytes. Anyone checking a reveal has to key the MAC the same way.
pub fn hmac_hex(key: &[u8], message: &str) -> String {
    let key_text = key_hex(key);
    let mut mac =
        HmacSha3_256::new_from_slice(key_text.as_bytes()).expect("hmac accepts any key length");
    mac.update(message.as_bytes());
    hex::encode_upper(mac.finalize().into_bytes())
}
