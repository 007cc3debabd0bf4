//! Utility functions and helper modules.
//!
//! Header parsing and the HMAC primitives used by the verifier and signer.

pub mod header;
pub mod hmac;

pub use self::header::*;
pub use self::hmac::*;
