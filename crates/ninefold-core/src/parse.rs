//! Parsing and loading of the 9-line puzzle text format.
//!
//! A puzzle file has 9 lines of 9 digit characters each, with `0` marking
//! empty cells. Comma characters are stripped before parsing and
//! leading/trailing whitespace per line is ignored, so both of these
//! describe the same grid:
//!
//! ```text
//! 530070000        5,3,0,0,7,0,0,0,0
//! 600195000        6,0,0,1,9,5,0,0,0
//! ...              ...
//! ```
//!
//! Parsing is a thin adapter: characters become digit values and the result
//! goes through [`Grid::from_rows`], so shape violations surface as the
//! same [`ShapeError`] construction reports.

use std::{fs, path::Path, str::FromStr};

use crate::grid::{Grid, ShapeError};

/// Error for parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseGridError {
    /// A character other than a digit or a stripped comma was found.
    #[display("line {line}: {ch:?} is not a digit")]
    InvalidCharacter {
        /// 1-based line number of the offending character.
        line: usize,
        /// The offending character.
        ch: char,
    },
    /// The text does not describe a 9×9 grid of digits.
    #[display("{_0}")]
    #[from]
    Shape(#[error(source)] ShapeError),
}

/// Error for [`Grid::load`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The puzzle file could not be read.
    #[display("failed to read puzzle file: {_0}")]
    Io(#[error(source)] std::io::Error),
    /// The file contents are not a valid grid.
    #[display("{_0}")]
    Parse(#[error(source)] ParseGridError),
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses the 9-line text format described in the [module docs](self).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (index, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.trim().chars().filter(|&ch| ch != ',') {
                let Some(digit) = ch.to_digit(10) else {
                    return Err(ParseGridError::InvalidCharacter {
                        line: index + 1,
                        ch,
                    });
                };
                #[expect(clippy::cast_possible_truncation)]
                row.push(digit as u8);
            }
            rows.push(row);
        }
        Ok(Grid::from_rows(rows)?)
    }
}

impl Grid {
    /// Loads a grid from a puzzle file in the 9-line text format.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Parse`] if its contents are not a valid grid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ninefold_core::Grid;
    ///
    /// let grid = Grid::load("puzzle.sudoku")?;
    /// println!("{grid}");
    /// # Ok::<(), ninefold_core::LoadError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        Ok(text.parse()?)
    }
}
