//! Configuration structures and loading utilities.

pub mod webhook;

pub use webhook::*;
