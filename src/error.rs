// In: src/error.rs

//! This module defines the single, unified error type for the entire algoritma
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlgoritmaError {
    // =========================================================================
    // === Precondition Violations (Specific to our library's contracts)
    // =========================================================================
    /// The matrix handed to `diagonal` is not square. Diagonal indexing is
    /// only defined for N rows of N columns each, so the violation is
    /// surfaced explicitly instead of panicking on an out-of-bounds index.
    #[error("Matrix is not square: row {row} has {actual} columns, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
