//! Iterated hashing with round-by-round observability.
//!
//! The chain is the classic hash self-composition: the digest produced at
//! round `i` becomes the input of round `i + 1`. Before each round is hashed,
//! the current value is emitted to a [`RoundSink`], which is how the CLI
//! prints its per-round lines and how tests inspect intermediate values.

use sha2::{Digest, Sha512};

/// Width of a SHA-512 digest in bytes.
pub const SHA512_DIGEST_BYTES: usize = 64;

/// A single observed round: the index and the bytes fed into the hash at
/// that round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// Zero-based round index.
    pub round: u32,
    /// Input bytes at this round, captured before hashing.
    pub input: Vec<u8>,
}

impl RoundRecord {
    /// Lowercase hex rendering of the round input.
    pub fn input_hex(&self) -> String {
        hex::encode(&self.input)
    }
}

/// Sink for per-round observations.
///
/// Emission is observational only: it cannot fail and does not affect the
/// value returned by the run.
pub trait RoundSink {
    /// Called once per round with the round index and the current value,
    /// before the hash is applied.
    fn emit(&mut self, round: u32, input: &[u8]);
}

/// Sink that discards every observation.
#[derive(Debug, Default)]
pub struct NullSink;

impl RoundSink for NullSink {
    fn emit(&mut self, _round: u32, _input: &[u8]) {}
}

/// Sink that records every round for later inspection.
#[derive(Debug, Default)]
pub struct ChainTrace {
    rows: Vec<RoundRecord>,
}

impl ChainTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded rounds, in emission order.
    pub fn rows(&self) -> &[RoundRecord] {
        &self.rows
    }

    /// Consumes the trace and returns the recorded rounds.
    pub fn into_rows(self) -> Vec<RoundRecord> {
        self.rows
    }
}

impl RoundSink for ChainTrace {
    fn emit(&mut self, round: u32, input: &[u8]) {
        self.rows.push(RoundRecord {
            round,
            input: input.to_vec(),
        });
    }
}

/// Applies the hash `D` to `seed` `rounds` times, emitting each round's
/// pre-hash value to `sink`.
///
/// The returned bytes equal `D` applied exactly `rounds` times in succession
/// to `seed`; zero rounds return the seed unchanged and emit nothing. The
/// primitive is injected through the [`Digest`] trait, so any hash with that
/// shape can be substituted.
pub fn run_chain<D: Digest, S: RoundSink>(seed: &[u8], rounds: u32, sink: &mut S) -> Vec<u8> {
    let mut current = seed.to_vec();
    for round in 0..rounds {
        sink.emit(round, &current);
        current = D::digest(&current).to_vec();
    }
    current
}

/// SHA-512 chain with observations discarded: `sha512_chain(s, n)` is SHA-512
/// applied `n` times to `s`.
pub fn sha512_chain(seed: &[u8], rounds: u32) -> Vec<u8> {
    run_chain::<Sha512, _>(seed, rounds, &mut NullSink)
}
