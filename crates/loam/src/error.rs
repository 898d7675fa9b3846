//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested dimensions describe a cell count that does not fit
    /// in `usize`.
    CapacityOverflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { rows, cols } => {
                write!(f, "cell count of a {rows} x {cols} grid overflows usize")
            }
        }
    }
}

impl std::error::Error for GridError {}
