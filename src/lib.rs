//! Iterated SHA-512 hashing with per-round observability.
//!
//! The crate provides a single component: a chain runner that repeatedly
//! applies a cryptographic hash to its own output, emitting each round's
//! pre-hash value to a pluggable sink. The hash primitive comes from the
//! `sha2` crate through the `Digest` trait and is never reimplemented here.

pub mod chain;
pub use chain::*;
