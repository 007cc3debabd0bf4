//! Errors raised while reading or checking a webhook signature.

use std::str::Utf8Error;

/// Errors that can occur while verifying a webhook signature
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("Invalid signature, expected time and verification but got: '{0}'!")]
    MalformedSignature(String),

    #[error("Signature time (t=<timestamp>) missing!")]
    MissingTimestamp,

    #[error("Signature verification (v=<verification>) missing!")]
    MissingVerification,

    #[error("Signature old verification (v0=<verification>) missing!")]
    MissingOldVerification,

    #[error("Signature header is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    #[error("Invalid secret key: {0}")]
    InvalidKey(String),
}

impl SignatureError {
    /// Get a message that is safe to return to the webhook sender
    pub fn user_message(&self) -> String {
        match self {
            SignatureError::MalformedSignature(_) => {
                "Signature header must contain time and verification".to_string()
            }
            SignatureError::MissingTimestamp => "Signature header is missing t=".to_string(),
            SignatureError::MissingVerification => "Signature header is missing v=".to_string(),
            SignatureError::MissingOldVerification => {
                "Signature header is missing v0=".to_string()
            }
            SignatureError::Encoding(_) => "Signature header is not valid text".to_string(),
            SignatureError::InvalidKey(_) => "Signature could not be verified".to_string(),
        }
    }

    /// Whether the failure was caused by the request rather than local configuration
    pub fn is_client_error(&self) -> bool {
        !matches!(self, SignatureError::InvalidKey(_))
    }
}
