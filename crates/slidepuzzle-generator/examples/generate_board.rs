//! Example demonstrating solvable board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` for a chosen grid size
//! - Generate random or seed-reproducible boards
//! - Display the board, its seed, and its inversion count
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Pick a grid size and generate several boards:
//!
//! ```sh
//! cargo run --example generate_board -- --size 5 --count 3
//! ```
//!
//! Reproduce a board from its printed seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed <64-hex-digit-seed>
//! ```
//!
//! Or derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_board -- --phrase "daily puzzle 2026-08-26"
//! ```

use std::process;

use clap::Parser;
use slidepuzzle_core::GridSize;
use slidepuzzle_generator::{BoardGenerator, BoardSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length N (boards are N×N).
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: u8,

    /// Seed as 64 hex digits; mutually exclusive with --phrase.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<BoardSeed>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Number of boards to generate (ignored when a seed is given).
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(size) = GridSize::try_new(args.size) else {
        eprintln!("--size must be at least 1.");
        process::exit(1);
    };
    let generator = BoardGenerator::new(size);

    let fixed_seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(BoardSeed::from_phrase));
    let count = if fixed_seed.is_some() { 1 } else { args.count };

    for i in 0..count {
        let generated = match fixed_seed {
            Some(seed) => generator.generate_with_seed(seed),
            None => generator.generate(),
        };
        if i > 0 {
            println!();
        }
        println!("Seed: {}", generated.seed);
        println!("Inversions: {}", generated.board.inversions());
        print!("{}", generated.board);
    }
}
