//! Webhook signature verification.

use crate::{
    error::SignatureError,
    models::{ParsedSignature, Secrets},
    utils::hmac::{digests_match, sign},
};
use tracing::{debug, warn};

/// Check a signature header against the current and previous webhook secrets
///
/// Returns `Ok(true)` when either supplied token matches the digest computed
/// with either secret. The cross check accepts a sender that rotated its
/// secret before or after the receiver did. Header errors are returned before
/// any digest is computed.
///
/// Pass the same value for `secret` and `old_secret` when no rotation is in
/// progress. The `t=` value is not checked for freshness.
pub fn check_signature(
    signature: &str,
    secret: &str,
    old_secret: &str,
    hook_url: &str,
    body: impl AsRef<[u8]>,
) -> Result<bool, SignatureError> {
    let parsed = ParsedSignature::parse(signature).inspect_err(|e| {
        warn!(
            message = "Rejected malformed webhook signature header",
            error = %e,
            hook_url = %hook_url,
        );
    })?;

    matches_secrets(&parsed, secret, old_secret, hook_url, body.as_ref())
}

/// Same as [`check_signature`], taking both keys as [`Secrets`]
pub fn check_signature_with(
    signature: &str,
    secrets: &Secrets,
    hook_url: &str,
    body: impl AsRef<[u8]>,
) -> Result<bool, SignatureError> {
    check_signature(
        signature,
        &secrets.secret,
        &secrets.old_secret,
        hook_url,
        body,
    )
}

/// Verify a header that has already been parsed
pub fn verify_parsed(
    parsed: &ParsedSignature,
    secrets: &Secrets,
    hook_url: &str,
    body: impl AsRef<[u8]>,
) -> Result<bool, SignatureError> {
    matches_secrets(
        parsed,
        &secrets.secret,
        &secrets.old_secret,
        hook_url,
        body.as_ref(),
    )
}

fn matches_secrets(
    parsed: &ParsedSignature,
    secret: &str,
    old_secret: &str,
    hook_url: &str,
    body: &[u8],
) -> Result<bool, SignatureError> {
    let compare = sign(secret, &parsed.time, hook_url, body)?;
    let old_compare = match parsed.old_verification {
        Some(_) => Some(sign(old_secret, &parsed.time, hook_url, body)?),
        None => None,
    };

    let verification = Some(parsed.verification.as_str());
    let old_verification = parsed.old_verification.as_deref();
    let old_compare = old_compare.as_deref();

    // Every pair is compared so the timing does not depend on which one matched.
    let checks = [
        ("v", "secret", token_matches(verification, Some(compare.as_str()))),
        ("v0", "secret", token_matches(old_verification, Some(compare.as_str()))),
        ("v", "old_secret", token_matches(verification, old_compare)),
        ("v0", "old_secret", token_matches(old_verification, old_compare)),
    ];

    match checks.iter().find(|(_, _, matched)| *matched) {
        Some((token, key, _)) => {
            debug!(
                message = "Webhook signature verified",
                time = %parsed.time,
                hook_url = %hook_url,
                token = *token,
                key = *key,
            );
            Ok(true)
        }
        None => {
            debug!(
                message = "Webhook signature did not match",
                time = %parsed.time,
                hook_url = %hook_url,
                with_old_verification = parsed.has_old_verification(),
            );
            Ok(false)
        }
    }
}

// An absent token or digest never matches.
fn token_matches(supplied: Option<&str>, expected: Option<&str>) -> bool {
    match (supplied, expected) {
        (Some(supplied), Some(expected)) => digests_match(supplied, expected),
        _ => false,
    }
}
