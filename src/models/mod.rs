//! Data structures shared by the parser, signer and verifier.

pub mod signature;

pub use signature::*;
