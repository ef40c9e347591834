//! CLI wrapper around the chain runner: hashes the fixed seed `b"abc"` for
//! `--rounds` rounds, printing each round's input and the final digest.

use std::{
    io::{self, Write},
    process::exit,
};

use clap::Parser;
use log::debug;
use sha2::Sha512;
use sha512_chain::{run_chain, RoundSink};

/// Seed fed into the first round.
const SEED: &[u8] = b"abc";

/// Repeatedly SHA-512 a seed value, printing each round's input
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of hash rounds to apply
    #[arg(long, value_name = "N", env = "SHA512_CHAIN_ROUNDS", default_value_t = 2)]
    rounds: u32,
}

/// Writes one `Round: <i> Input: <hex>` line per observed round.
struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> RoundSink for ConsoleSink<W> {
    fn emit(&mut self, round: u32, input: &[u8]) {
        writeln!(self.out, "Round: {} Input: {}", round, hex::encode(input))
            .expect("failed printing to stdout");
    }
}

/// Runs the chain over the fixed seed and writes the full report: one line
/// per round, then `Result`, then the final digest in hex.
fn write_report<W: Write>(out: &mut W, rounds: u32) -> io::Result<()> {
    let digest = run_chain::<Sha512, _>(SEED, rounds, &mut ConsoleSink { out: &mut *out });
    writeln!(out, "Result")?;
    writeln!(out, "{}", hex::encode(digest))
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    debug!("sha512-chain starting");

    let cli = Cli::parse();
    debug!("rounds: {}", cli.rounds);

    if let Err(e) = write_report(&mut io::stdout(), cli.rounds) {
        eprintln!("Error: {e}");
        exit(1);
    }
}
