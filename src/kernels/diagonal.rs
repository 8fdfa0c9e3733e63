//! This module contains the pure, stateless kernel for matrix diagonal-sum
//! comparison.
//!
//! For an N×N matrix it walks both diagonals in a single pass: the main
//! diagonal at `[i][i]` and the anti-diagonal at `[i][N-1-i]`, accumulating
//! each sum along the way. The result is the rendered comparison of the two,
//! ending in the signed difference `main_sum - anti_sum`.
//!
//! The original exercise left non-square input as undefined behavior (an
//! index error). Here the squareness precondition is checked up front and
//! surfaced as an explicit `AlgoritmaError`, since no recovery behavior is
//! specified and silent truncation would change the contract.

use num_traits::Num;
use std::fmt::Debug;

use crate::error::AlgoritmaError;

//==================================================================================
// 1. Private Core Logic
//==================================================================================

/// Verifies that every row of `matrix` has exactly as many columns as the
/// matrix has rows. Diagonal indexing is undefined otherwise.
fn check_square<T>(matrix: &[Vec<T>]) -> Result<(), AlgoritmaError> {
    let n = matrix.len();
    for (row, cols) in matrix.iter().enumerate() {
        if cols.len() != n {
            return Err(AlgoritmaError::NonSquareMatrix {
                row,
                expected: n,
                actual: cols.len(),
            });
        }
    }
    Ok(())
}

/// Collects both diagonals of a (pre-validated) square matrix, main first.
fn extract_diagonals<T: Copy>(matrix: &[Vec<T>]) -> (Vec<T>, Vec<T>) {
    let n = matrix.len();
    let mut main_diag = Vec::with_capacity(n);
    let mut anti_diag = Vec::with_capacity(n);
    for i in 0..n {
        main_diag.push(matrix[i][i]);
        anti_diag.push(matrix[i][n - 1 - i]);
    }
    (main_diag, anti_diag)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Computes both diagonals of the square `matrix` and renders
/// `"([main] = main_sum) - ([anti] = anti_sum) = difference"` where
/// `difference` is the signed `main_sum - anti_sum`.
///
/// The element type only needs `num_traits::Num` for zero and arithmetic,
/// plus `Debug` for rendering. Note that an unsigned `T` cannot represent a
/// negative difference; callers wanting the full signed contract should use
/// a signed element type.
///
/// Returns `AlgoritmaError::NonSquareMatrix` when any row's length differs
/// from the row count. The 0×0 matrix is square and yields
/// `"([] = 0) - ([] = 0) = 0"`.
///
/// # Example
/// ```
/// use algoritma::kernels::diagonal;
/// let matrix = vec![vec![1, 2, 0], vec![4, 5, 6], vec![7, 8, 9]];
/// assert_eq!(
///     diagonal(&matrix).unwrap(),
///     "([1, 5, 9] = 15) - ([0, 5, 7] = 12) = 3"
/// );
/// ```
pub fn diagonal<T>(matrix: &[Vec<T>]) -> Result<String, AlgoritmaError>
where
    T: Copy + Num + Debug,
{
    check_square(matrix)?;
    let (main_diag, anti_diag) = extract_diagonals(matrix);

    let main_sum = main_diag.iter().fold(T::zero(), |acc, &x| acc + x);
    let anti_sum = anti_diag.iter().fold(T::zero(), |acc, &x| acc + x);
    let difference = main_sum - anti_sum;

    Ok(format!(
        "({:?} = {:?}) - ({:?} = {:?}) = {:?}",
        main_diag, main_sum, anti_diag, anti_sum, difference
    ))
}
