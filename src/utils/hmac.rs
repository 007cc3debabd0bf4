//! HMAC signature generation and comparison utilities.

use crate::error::SignatureError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Generate the hex HMAC-SHA256 of `{time}.{hook_url}.{body}`
pub fn sign(
    secret: &str,
    time: &str,
    hook_url: &str,
    body: impl AsRef<[u8]>,
) -> Result<String, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;

    mac.update(time.as_bytes());
    mac.update(b".");
    mac.update(hook_url.as_bytes());
    mac.update(b".");
    mac.update(body.as_ref());

    let result = mac.finalize();
    Ok(hex::encode(result.into_bytes()))
}

/// Compare a supplied verification token with an expected digest in constant time
pub fn digests_match(supplied: &str, expected: &str) -> bool {
    if supplied.len() != expected.len() {
        return false;
    }
    supplied.as_bytes().ct_eq(expected.as_bytes()).into()
}
