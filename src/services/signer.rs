//! Outbound signature header generation.
//!
//! The sending side of the webhook contract. During a rotation window the
//! sender adds a `v0=` token signed with the previous secret so receivers
//! that have not switched keys yet still accept the request.

use crate::{
    error::SignatureError,
    models::Secrets,
    utils::{header::format_signature_header, hmac::sign},
};
use chrono::Utc;
use tracing::debug;

/// Build a `t=..,v=..[,v0=..]` header for the given request
pub fn create_signature_header(
    secrets: &Secrets,
    time: &str,
    hook_url: &str,
    body: impl AsRef<[u8]>,
    include_old: bool,
) -> Result<String, SignatureError> {
    let body = body.as_ref();
    let verification = sign(&secrets.secret, time, hook_url, body)?;

    let old_verification = if include_old {
        Some(sign(&secrets.old_secret, time, hook_url, body)?)
    } else {
        None
    };

    debug!(
        message = "Signed webhook request",
        time = %time,
        hook_url = %hook_url,
        with_old_verification = include_old,
    );

    Ok(format_signature_header(
        time,
        &verification,
        old_verification.as_deref(),
    ))
}

/// Build a header stamped with the current Unix time in seconds
///
/// The old token is only added while `secrets` actually differ.
pub fn create_signature_header_now(
    secrets: &Secrets,
    hook_url: &str,
    body: impl AsRef<[u8]>,
) -> Result<String, SignatureError> {
    let time = Utc::now().timestamp().to_string();
    create_signature_header(secrets, &time, hook_url, body, secrets.is_rotating())
}
