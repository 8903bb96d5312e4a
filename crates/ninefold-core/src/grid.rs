//! The mutable 9×9 sudoku grid.
//!
//! [`Grid`] owns a fixed 81-cell board and exposes the queries a solver
//! needs: per-cell reads and writes, row/column/block extraction, candidate
//! computation, a row-major first-empty-cell scan, and a solved-state check.
//! The grid itself enforces no sudoku constraints beyond the value range;
//! duplicate digits are permitted transiently while a solver works.

use std::fmt::{self, Display};

use crate::{digit_set::DigitSet, position::Position};

/// Error for [`Grid::from_rows`]: the input does not describe a 9×9 grid of
/// digits.
///
/// Construction is all-or-nothing; no grid is produced on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapeError {
    /// The input does not have exactly 9 rows.
    #[display("expected 9 rows, found {found}")]
    RowCount {
        /// Number of rows in the input.
        found: usize,
    },
    /// A row does not have exactly 9 values.
    #[display("row {y} has {found} values, expected 9")]
    RowLength {
        /// Row index (0-8) of the offending row.
        y: usize,
        /// Number of values in that row.
        found: usize,
    },
    /// A value falls outside the range 0-9.
    #[display("value {value} at column {x}, row {y} is outside 0-9")]
    ValueRange {
        /// Column index of the offending value.
        x: usize,
        /// Row index of the offending value.
        y: usize,
        /// The offending value.
        value: u8,
    },
}

/// A mutable 9×9 sudoku grid.
///
/// Cells hold values 0-9, where 0 means empty. Cells are addressed by
/// [`Position`] (column `x`, row `y`); storage is row-major. The grid never
/// resizes, and it is `Clone` but deliberately not `Copy`: a branching
/// search that wants to try a placement on a scratch board must snapshot
/// explicitly (or use [`place`]/[`unplace`] pairs to undo).
///
/// The grid does not police sudoku consistency. A solver is expected to
/// place only values drawn from [`options_at`], but nothing stops it from
/// writing a conflicting digit; [`is_solved`] and [`options_at`] observe
/// the resulting state either way.
///
/// [`place`]: Grid::place
/// [`unplace`]: Grid::unplace
/// [`options_at`]: Grid::options_at
/// [`is_solved`]: Grid::is_solved
///
/// # Examples
///
/// ```
/// use ninefold_core::{Grid, Position};
///
/// let mut grid = Grid::empty();
/// assert_eq!(grid.next_empty_position(), Some(Position::new(0, 0)));
///
/// grid.place(Position::new(0, 0), 5);
/// assert_eq!(grid.value_at(Position::new(0, 0)), 5);
/// assert!(!grid.options_at(Position::new(3, 0)).contains(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Row-major: the value of cell (x, y) lives at index `y * 9 + x`.
    cells: [u8; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [0; 81] }
    }

    /// Creates a grid from 9 rows of 9 values each, top row first.
    ///
    /// Values must be in the range 0-9, with 0 for empty cells.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the input does not have exactly 9 rows,
    /// any row does not have exactly 9 values, or any value exceeds 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Grid, Position};
    ///
    /// let grid = Grid::from_rows([
    ///     [5, 3, 0, 0, 7, 0, 0, 0, 0],
    ///     [6, 0, 0, 1, 9, 5, 0, 0, 0],
    ///     [0, 9, 8, 0, 0, 0, 0, 6, 0],
    ///     [8, 0, 0, 0, 6, 0, 0, 0, 3],
    ///     [4, 0, 0, 8, 0, 3, 0, 0, 1],
    ///     [7, 0, 0, 0, 2, 0, 0, 0, 6],
    ///     [0, 6, 0, 0, 0, 0, 2, 8, 0],
    ///     [0, 0, 0, 4, 1, 9, 0, 0, 5],
    ///     [0, 0, 0, 0, 8, 0, 0, 7, 9],
    /// ])?;
    ///
    /// assert_eq!(grid.value_at(Position::new(0, 0)), 5);
    /// assert_eq!(grid.value_at(Position::new(4, 1)), 9);
    /// # Ok::<(), ninefold_core::ShapeError>(())
    /// ```
    pub fn from_rows<R, V>(rows: R) -> Result<Self, ShapeError>
    where
        R: IntoIterator<Item = V>,
        V: IntoIterator<Item = u8>,
    {
        let rows: Vec<Vec<u8>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        if rows.len() != 9 {
            return Err(ShapeError::RowCount { found: rows.len() });
        }

        let mut cells = [0; 81];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != 9 {
                return Err(ShapeError::RowLength {
                    y,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value > 9 {
                    return Err(ShapeError::ValueRange { x, y, value });
                }
                cells[y * 9 + x] = value;
            }
        }
        Ok(Self { cells })
    }

    /// Returns the value at a position; 0 means the cell is empty.
    #[must_use]
    #[inline]
    pub fn value_at(&self, pos: Position) -> u8 {
        self.cells[pos.index()]
    }

    /// Writes `value` at a position, overwriting whatever was there.
    ///
    /// Placing 0 empties the cell, the same as [`unplace`](Grid::unplace).
    /// No legality check is performed: the caller may write a digit that
    /// conflicts with its row, column, or block.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    #[inline]
    pub fn place(&mut self, pos: Position, value: u8) {
        assert!(value <= 9, "cell value must be between 0 and 9, got {value}");
        self.cells[pos.index()] = value;
    }

    /// Empties the cell at a position. Equivalent to placing 0 there.
    #[inline]
    pub fn unplace(&mut self, pos: Position) {
        self.cells[pos.index()] = 0;
    }

    /// Returns the values of row `y`, in column order (x = 0..8).
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row_values(&self, y: u8) -> [u8; 9] {
        let mut values = [0; 9];
        for x in 0..9 {
            values[usize::from(x)] = self.value_at(Position::new(x, y));
        }
        values
    }

    /// Returns the values of column `x`, in row order (y = 0..8).
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn column_values(&self, x: u8) -> [u8; 9] {
        let mut values = [0; 9];
        for y in 0..9 {
            values[usize::from(y)] = self.value_at(Position::new(x, y));
        }
        values
    }

    /// Returns the values of block `block`, row-major within the block.
    ///
    /// Blocks are numbered left to right, top to bottom (see
    /// [`Position::block_index`]). For block 4 the order is (3,3), (4,3),
    /// (5,3), (3,4), and so on.
    ///
    /// # Panics
    ///
    /// Panics if `block` is not in the range 0-8.
    #[must_use]
    pub fn block_values(&self, block: u8) -> [u8; 9] {
        let mut values = [0; 9];
        for i in 0..9 {
            values[usize::from(i)] = self.value_at(Position::from_block(block, i));
        }
        values
    }

    /// Computes the digits legally placeable at a position under classic
    /// sudoku constraints.
    ///
    /// Starts from all of 1-9 and removes every value currently present in
    /// the cell's row, column, and block. If the cell itself holds a digit,
    /// that digit is excluded too — the cell belongs to all three groups —
    /// so a filled cell never lists its own value as an option.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{DigitSet, Grid, Position};
    ///
    /// let grid = Grid::empty();
    /// assert_eq!(grid.options_at(Position::new(0, 0)), DigitSet::FULL);
    ///
    /// let mut grid = Grid::empty();
    /// grid.place(Position::new(0, 0), 5);
    /// grid.place(Position::new(8, 4), 3);
    /// let options = grid.options_at(Position::new(0, 4));
    /// assert!(!options.contains(5)); // same column as (0, 0)
    /// assert!(!options.contains(3)); // same row as (8, 4)
    /// assert_eq!(options.len(), 7);
    /// ```
    #[must_use]
    pub fn options_at(&self, pos: Position) -> DigitSet {
        let mut options = DigitSet::FULL;
        for group in [
            self.row_values(pos.y()),
            self.column_values(pos.x()),
            self.block_values(pos.block_index()),
        ] {
            for value in group {
                if value != 0 {
                    options.remove(value);
                }
            }
        }
        options
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// grid is full.
    ///
    /// The scan goes through row 0 first, then row 1, and within a row
    /// through column 0 first. A solver that repeatedly fills the cell
    /// returned here behaves deterministically, which keeps solving runs
    /// reproducible.
    #[must_use]
    pub fn next_empty_position(&self) -> Option<Position> {
        Position::all().find(|&pos| self.value_at(pos) == 0)
    }

    /// Checks whether the grid is solved: every row, every column, and
    /// every block contains all nine of the digits 1-9.
    ///
    /// Each group has 9 cells, so containing all 9 required digits also
    /// rules out duplicates. Any empty cell makes this false.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Grid;
    ///
    /// assert!(!Grid::empty().is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        (0..9).all(|i| {
            contains_all_digits(self.row_values(i))
                && contains_all_digits(self.column_values(i))
                && contains_all_digits(self.block_values(i))
        })
    }
}

/// Checks that a nine-cell group contains every digit 1-9.
fn contains_all_digits(values: [u8; 9]) -> bool {
    let mut seen = DigitSet::EMPTY;
    for value in values {
        if value == 0 {
            return false;
        }
        seen.insert(value);
    }
    seen == DigitSet::FULL
}

impl Display for Grid {
    /// Renders the grid as 9 lines of 9 digits with no separators and no
    /// trailing newline. A debugging aid, not a serialization format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y != 0 {
                writeln!(f)?;
            }
            for value in self.row_values(y) {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// The classic example puzzle.
    fn puzzle() -> Grid {
        Grid::from_rows([
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9],
        ])
        .unwrap()
    }

    /// The solution to [`puzzle`].
    fn solution() -> Grid {
        Grid::from_rows([
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows_round_trips_values() {
        let grid = puzzle();
        assert_eq!(grid.value_at(Position::new(0, 0)), 5);
        assert_eq!(grid.value_at(Position::new(2, 0)), 0);
        assert_eq!(grid.value_at(Position::new(3, 1)), 1);
        assert_eq!(grid.value_at(Position::new(8, 8)), 9);
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_count() {
        let rows = vec![vec![0u8; 9]; 8];
        assert_eq!(
            Grid::from_rows(rows),
            Err(ShapeError::RowCount { found: 8 })
        );

        let rows = vec![vec![0u8; 9]; 10];
        assert_eq!(
            Grid::from_rows(rows),
            Err(ShapeError::RowCount { found: 10 })
        );
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_length() {
        let mut rows = vec![vec![0u8; 9]; 9];
        rows[3] = vec![0; 8];
        assert_eq!(
            Grid::from_rows(rows),
            Err(ShapeError::RowLength { y: 3, found: 8 })
        );
    }

    #[test]
    fn test_from_rows_rejects_value_out_of_range() {
        let mut rows = vec![vec![0u8; 9]; 9];
        rows[2][5] = 12;
        assert_eq!(
            Grid::from_rows(rows),
            Err(ShapeError::ValueRange {
                x: 5,
                y: 2,
                value: 12
            })
        );
    }

    #[test]
    fn test_place_overwrites() {
        let mut grid = Grid::empty();
        let pos = Position::new(4, 7);
        grid.place(pos, 3);
        assert_eq!(grid.value_at(pos), 3);
        grid.place(pos, 8);
        assert_eq!(grid.value_at(pos), 8);
    }

    #[test]
    #[should_panic(expected = "cell value must be between 0 and 9")]
    fn test_place_rejects_value_out_of_range() {
        let mut grid = Grid::empty();
        grid.place(Position::new(0, 0), 10);
    }

    #[test]
    fn test_unplace_is_place_zero() {
        let mut a = puzzle();
        let mut b = puzzle();
        let pos = Position::new(0, 0);
        a.unplace(pos);
        b.place(pos, 0);
        assert_eq!(a, b);
        assert_eq!(a.value_at(pos), 0);
    }

    #[test]
    fn test_row_values_matches_value_at() {
        let grid = puzzle();
        for y in 0..9 {
            let row = grid.row_values(y);
            for x in 0..9 {
                assert_eq!(row[usize::from(x)], grid.value_at(Position::new(x, y)));
            }
        }
    }

    #[test]
    fn test_column_values_matches_value_at() {
        let grid = puzzle();
        for x in 0..9 {
            let column = grid.column_values(x);
            for y in 0..9 {
                assert_eq!(column[usize::from(y)], grid.value_at(Position::new(x, y)));
            }
        }
    }

    #[test]
    fn test_block_values_order() {
        let grid = puzzle();
        // Block 4 covers columns 3-5, rows 3-5, row-major within the block
        assert_eq!(grid.block_values(4), [0, 6, 0, 8, 0, 3, 0, 2, 0]);
        // Block 0 is the top-left corner
        assert_eq!(grid.block_values(0), [5, 3, 0, 6, 0, 0, 0, 9, 8]);
    }

    #[test]
    fn test_block_values_covers_every_block_cell() {
        let grid = solution();
        for block in 0..9 {
            let mut seen = DigitSet::EMPTY;
            for value in grid.block_values(block) {
                seen.insert(value);
            }
            assert_eq!(seen, DigitSet::FULL);
        }
    }

    #[test]
    fn test_options_at_on_known_cell() {
        let grid = puzzle();
        // (2, 0): row has {5, 3, 7}, column has {8}, block has {5, 3, 6, 9, 8}
        let options = grid.options_at(Position::new(2, 0));
        assert_eq!(options, DigitSet::from_iter([1, 2, 4]));
    }

    #[test]
    fn test_options_at_excludes_own_value() {
        let grid = puzzle();
        // (0, 0) holds 5; self-membership in row/column/block excludes it
        let options = grid.options_at(Position::new(0, 0));
        assert!(!options.contains(5));
    }

    #[test]
    fn test_options_at_on_empty_grid() {
        let grid = Grid::empty();
        assert_eq!(grid.options_at(Position::new(0, 0)), DigitSet::FULL);
    }

    #[test]
    fn test_next_empty_position_row_major() {
        let grid = puzzle();
        // Row 0 is 5 3 0 ... -> first zero at column 2
        assert_eq!(grid.next_empty_position(), Some(Position::new(2, 0)));

        let mut grid = solution();
        grid.unplace(Position::new(7, 3));
        grid.unplace(Position::new(1, 6));
        // (7, 3) comes first in row-major order
        assert_eq!(grid.next_empty_position(), Some(Position::new(7, 3)));
    }

    #[test]
    fn test_next_empty_position_on_full_grid() {
        assert_eq!(solution().next_empty_position(), None);
    }

    #[test]
    fn test_empty_grid_scenario() {
        let grid = Grid::empty();
        assert_eq!(grid.next_empty_position(), Some(Position::new(0, 0)));
        assert_eq!(grid.options_at(Position::new(0, 0)), DigitSet::FULL);
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_solution_is_solved() {
        assert!(solution().is_solved());
    }

    #[test]
    fn test_incomplete_grid_is_not_solved() {
        assert!(!puzzle().is_solved());

        let mut grid = solution();
        grid.unplace(Position::new(4, 4));
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_duplicate_makes_grid_unsolved() {
        let mut grid = solution();
        // Row 0 becomes 3 3 4 ... : no empty cell, but 5 is missing
        grid.place(Position::new(0, 0), 3);
        assert_eq!(grid.next_empty_position(), None);
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_display_format() {
        let grid = puzzle();
        let rendered = grid.to_string();
        let lines: Vec<_> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "530070000");
        assert_eq!(lines[8], "000080079");
        assert!(!rendered.ends_with('\n'));
    }

    proptest! {
        #[test]
        fn place_then_value_at_round_trips(
            x in 0u8..9,
            y in 0u8..9,
            value in 0u8..=9,
        ) {
            let mut grid = Grid::empty();
            grid.place(Position::new(x, y), value);
            prop_assert_eq!(grid.value_at(Position::new(x, y)), value);
        }

        #[test]
        fn options_never_contain_a_group_value(values in prop::collection::vec(0u8..=9, 81)) {
            let grid = Grid::from_rows(values.chunks(9).map(<[u8]>::to_vec)).unwrap();
            for pos in Position::all() {
                let options = grid.options_at(pos);
                for value in grid.row_values(pos.y()) {
                    if value != 0 {
                        prop_assert!(!options.contains(value));
                    }
                }
                for value in grid.column_values(pos.x()) {
                    if value != 0 {
                        prop_assert!(!options.contains(value));
                    }
                }
                for value in grid.block_values(pos.block_index()) {
                    if value != 0 {
                        prop_assert!(!options.contains(value));
                    }
                }
            }
        }

        #[test]
        fn next_empty_position_matches_naive_scan(values in prop::collection::vec(0u8..=9, 81)) {
            let grid = Grid::from_rows(values.chunks(9).map(<[u8]>::to_vec)).unwrap();

            let mut naive = None;
            'scan: for y in 0..9u8 {
                for x in 0..9u8 {
                    if values[usize::from(y) * 9 + usize::from(x)] == 0 {
                        naive = Some(Position::new(x, y));
                        break 'scan;
                    }
                }
            }
            prop_assert_eq!(grid.next_empty_position(), naive);
        }
    }
}
