use std::fmt;

/// Unified error type for the fallible solutions.
///
/// The subsequence matchers never fail; only inputs with a stated
/// precondition (digit strings, sorted matrices, difficulty names) do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A digit string contained something other than `0..=9`.
    InvalidDigit {
        /// Which operand, 1-based.
        operand: usize,
        /// Byte offset inside that operand.
        position: usize,
        found: char,
    },
    /// A matrix row has a different length than the first row.
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell at (row, col) is smaller than its left or upper neighbour.
    Unsorted { row: usize, col: usize },
    /// Difficulty name not recognised.
    UnknownDifficulty(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDigit {
                operand,
                position,
                found,
            } => write!(
                f,
                "Invalid digit {found:?} at position {position} of operand {operand}"
            ),
            Error::RaggedMatrix {
                row,
                expected,
                found,
            } => write!(
                f,
                "Ragged matrix: row {row} has {found} columns, expected {expected}"
            ),
            Error::Unsorted { row, col } => {
                write!(f, "Matrix not sorted at row {row}, column {col}")
            }
            Error::UnknownDifficulty(name) => write!(f, "Unknown difficulty: {name}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
