//! Core data structures for sudoku grid manipulation.
//!
//! This crate provides the board substrate that sudoku solvers are built
//! on: a mutable 9×9 grid with row, column, and 3×3 block accessors,
//! per-cell candidate computation, a deterministic first-empty-cell scan,
//! and a solved-state check. Search strategies, solving techniques, and
//! puzzle generation are out of scope and belong in crates layered on top.
//!
//! # Overview
//!
//! - [`Grid`] — the 9×9 board itself. Cells hold 0 (empty) or a digit 1-9,
//!   addressed by column `x` and row `y`. Mutation is in place via
//!   [`Grid::place`] and [`Grid::unplace`]; a backtracking solver either
//!   undoes placements pairwise or clones the grid per branch.
//! - [`Position`] — an (x, y) coordinate, bounds-checked at construction,
//!   with the block-index arithmetic for the nine 3×3 blocks.
//! - [`DigitSet`] — a 9-bit set of digits 1-9, the result of candidate
//!   computation.
//! - [`parse`] — the 9-line text format (commas tolerated) and file
//!   loading.
//!
//! The grid enforces no sudoku constraints on writes. Consistency is the
//! caller's job: place values drawn from [`Grid::options_at`] and the grid
//! stays consistent; [`Grid::is_solved`] reports whether every row, column,
//! and block holds all of 1-9.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Grid, Position};
//!
//! let mut grid = Grid::from_rows([
//!     [5, 3, 0, 0, 7, 0, 0, 0, 0],
//!     [6, 0, 0, 1, 9, 5, 0, 0, 0],
//!     [0, 9, 8, 0, 0, 0, 0, 6, 0],
//!     [8, 0, 0, 0, 6, 0, 0, 0, 3],
//!     [4, 0, 0, 8, 0, 3, 0, 0, 1],
//!     [7, 0, 0, 0, 2, 0, 0, 0, 6],
//!     [0, 6, 0, 0, 0, 0, 2, 8, 0],
//!     [0, 0, 0, 4, 1, 9, 0, 0, 5],
//!     [0, 0, 0, 0, 8, 0, 0, 7, 9],
//! ])?;
//!
//! // The first hole in row-major order, and what could go there
//! let pos = grid.next_empty_position().unwrap();
//! assert_eq!(pos, Position::new(2, 0));
//! let options: Vec<u8> = grid.options_at(pos).iter().collect();
//! assert_eq!(options, vec![1, 2, 4]);
//!
//! // Try one, take it back
//! grid.place(pos, 4);
//! assert_eq!(grid.value_at(pos), 4);
//! grid.unplace(pos);
//! assert_eq!(grid.value_at(pos), 0);
//! # Ok::<(), ninefold_core::ShapeError>(())
//! ```

pub mod digit_set;
pub mod grid;
pub mod parse;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit_set::DigitSet,
    grid::{Grid, ShapeError},
    parse::{LoadError, ParseGridError},
    position::Position,
};
