//! Signature verification and signing services.

pub mod signer;
pub mod verifier;

pub use signer::*;
pub use verifier::*;
