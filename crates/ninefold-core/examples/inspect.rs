//! Example inspecting a sudoku puzzle file.
//!
//! Loads a puzzle in the 9-line text format (commas tolerated), prints the
//! grid, and reports the first empty cell with its candidate digits.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example inspect -- path/to/puzzle.sudoku
//! ```

use std::{path::PathBuf, process};

use clap::Parser;
use ninefold_core::Grid;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file: 9 lines of 9 digits, 0 for empty, commas allowed.
    #[arg(value_name = "FILE")]
    path: PathBuf,
}

fn main() {
    let args = Args::parse();

    let grid = match Grid::load(&args.path) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}: {err}", args.path.display());
            process::exit(1);
        }
    };

    println!("{grid}");
    println!();

    match grid.next_empty_position() {
        Some(pos) => {
            let options: Vec<u8> = grid.options_at(pos).iter().collect();
            println!("first empty cell: {pos}");
            println!("candidates: {options:?}");
        }
        None if grid.is_solved() => println!("solved"),
        None => println!("full, but not a valid solution"),
    }
}
