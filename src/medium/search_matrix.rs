//! 240. Search a 2D Matrix II
//!
//! Every row is sorted left to right and every column top to bottom.
//! Start in the top-right corner: a larger cell rules out its whole column,
//! a smaller one rules out its whole row.
//!
//! ```text
//!   1   4   7  [11]   target 5
//!   2   5   8   12    11 > 5 → left, 7 > 5 → left, 4 < 5 → down, 5 == 5
//!   3   6   9   16
//! ```
//!
//! O(rows + cols).

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::Problem;
use crate::error::{Error, Result};
use crate::types::Difficulty;

pub const PROBLEM: Problem = Problem {
    id: 240,
    title: "Search a 2D Matrix II",
    slug: "search-a-2d-matrix-ii",
    difficulty: Difficulty::Medium,
    topics: &["Array", "Binary Search", "Divide and Conquer", "Matrix"],
};

/// Staircase search for `target`.
///
/// Assumes sorted rows and columns; the result is unspecified (but never a
/// panic) if they are not. Use [`SortedMatrix`] to check that up front.
/// An empty matrix, or one with empty rows, contains nothing.
pub fn search_matrix<T: Ord, R: AsRef<[T]>>(matrix: &[R], target: &T) -> bool {
    let mut row = 0;
    // Exclusive bound: the current column is `col - 1`.
    let mut col = matrix.first().map_or(0, |r| r.as_ref().len());

    while row < matrix.len() {
        let line = matrix[row].as_ref();
        col = col.min(line.len());
        if col == 0 {
            break;
        }

        match line[col - 1].cmp(target) {
            Ordering::Equal => return true,
            Ordering::Greater => col -= 1,
            Ordering::Less => row += 1,
        }
    }

    false
}

/// A matrix known to satisfy the search precondition: rectangular, with
/// non-decreasing rows and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedMatrix<T> {
    rows: Vec<Vec<T>>,
    cols: usize,
}

impl<T: Ord> SortedMatrix<T> {
    /// Validate `rows` and wrap them.
    ///
    /// # Errors
    /// - `Error::RaggedMatrix` if a row's length differs from the first row's.
    /// - `Error::Unsorted` at the first cell smaller than its left or upper
    ///   neighbour.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = validate(&rows).inspect_err(|e| debug!(error = %e, "rejected matrix"))?;
        Ok(Self { rows, cols })
    }

    pub fn contains(&self, target: &T) -> bool {
        search_matrix(&self.rows, target)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn into_inner(self) -> Vec<Vec<T>> {
        self.rows
    }
}

/// Returns the column count.
fn validate<T: Ord>(rows: &[Vec<T>]) -> Result<usize> {
    let cols = rows.first().map_or(0, Vec::len);

    for (r, line) in rows.iter().enumerate() {
        if line.len() != cols {
            return Err(Error::RaggedMatrix {
                row: r,
                expected: cols,
                found: line.len(),
            });
        }
        for c in 0..cols {
            let left_ok = c == 0 || line[c - 1] <= line[c];
            let up_ok = r == 0 || rows[r - 1][c] <= line[c];
            if !left_ok || !up_ok {
                return Err(Error::Unsorted { row: r, col: c });
            }
        }
    }

    Ok(cols)
}
