//! Signature header and secret models.

use crate::{error::SignatureError, utils::header};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A parsed signature header
///
/// `time` is kept as the sender wrote it. It only takes part in the signed
/// message and is never checked for format or freshness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSignature {
    pub time: String,
    pub verification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_verification: Option<String>,
}

impl ParsedSignature {
    /// Parse a `t=..,v=..[,v0=..]` header value
    pub fn parse(signature: &str) -> Result<Self, SignatureError> {
        header::parse_signature_header(signature)
    }

    /// Parse a header value straight from the raw request bytes
    pub fn from_bytes(signature: &[u8]) -> Result<Self, SignatureError> {
        let signature = std::str::from_utf8(signature)?;
        Self::parse(signature)
    }

    /// Whether the sender included a `v0=` token
    pub fn has_old_verification(&self) -> bool {
        self.old_verification.is_some()
    }
}

impl FromStr for ParsedSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&header::format_signature_header(
            &self.time,
            &self.verification,
            self.old_verification.as_deref(),
        ))
    }
}

/// Current and previous signing keys
///
/// Outside a rotation window both keys are the same value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secrets {
    pub secret: String,
    pub old_secret: String,
}

impl Secrets {
    /// Secrets for a webhook in the middle of a key rotation
    pub fn new(secret: impl Into<String>, old_secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            old_secret: old_secret.into(),
        }
    }

    /// Secrets for a webhook that is not rotating its key
    pub fn single(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        Self {
            old_secret: secret.clone(),
            secret,
        }
    }

    /// Whether the current and previous keys differ
    pub fn is_rotating(&self) -> bool {
        self.secret != self.old_secret
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("secret", &"<redacted>")
            .field("old_secret", &"<redacted>")
            .finish()
    }
}
