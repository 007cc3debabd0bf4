//! Webhook Signature - HMAC-SHA256 verification for signed webhook requests
//!
//! A sender signs every webhook request and carries the result in a header:
//!
//! ```text
//! X-Fliqa-Signature: t={time},v={hex hmac}
//! X-Fliqa-Signature: t={time},v={hex hmac},v0={hex hmac with the old secret}
//! ```
//!
//! Each token is the HMAC-SHA256 of `{time}.{hook_url}.{body}`. The receiver
//! recomputes the digest with its current and previous secret and accepts the
//! request when any token matches either digest, so both sides can rotate
//! their secret independently.
//!
//! ## Architecture
//!
//! - `models/` - Parsed header and secret pair
//! - `services/` - Verification and outbound header signing
//! - `utils/` - Header parsing and HMAC primitives
//! - `config/` - Secret configuration from the environment
//!
//! ## Quick Start
//!
//! ```
//! use webhook_signature::{check_signature, create_signature_header, Secrets};
//!
//! let secrets = Secrets::new("s1", "s0");
//! let header = create_signature_header(&secrets, "1000", "https://example.com/hook", "{}", true)?;
//!
//! assert!(check_signature(&header, "s1", "s0", "https://example.com/hook", "{}")?);
//! # Ok::<(), webhook_signature::SignatureError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

/// HTTP header that carries the signature
pub const SIGNATURE_HEADER: &str = "X-Fliqa-Signature";

pub use config::WebhookConfig;
pub use error::SignatureError;
pub use models::{ParsedSignature, Secrets};
pub use services::{
    check_signature, check_signature_with, create_signature_header, create_signature_header_now,
    verify_parsed,
};
pub use utils::hmac as hmac_utils;
