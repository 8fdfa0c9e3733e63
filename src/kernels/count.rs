//! This module contains the pure, stateless kernel for element-frequency
//! counting.
//!
//! For each query value, in order, the kernel counts that value's occurrences
//! anywhere in the input sequence by exact equality. The kernel is generic
//! over any element type with an equality capability, which is the typed
//! rendering of the original's duck-typed `count` over arbitrary comparables.

//==================================================================================
// 1. Public API
//==================================================================================

/// Returns, for each element of `queries`, the number of exact matches of
/// that element in `input`. The output has the same length and order as
/// `queries`; values absent from `input` count 0.
///
/// Each query is counted independently with a fresh linear scan, so duplicate
/// queries simply produce repeated counts. With small inputs the O(Q*N) scan
/// is the whole story; no memoization is performed.
///
/// # Example
/// ```
/// use algoritma::kernels::count;
/// let input = ["xc", "dz", "bbb", "dz"];
/// let queries = ["bbb", "ac", "dz"];
/// assert_eq!(count(&input, &queries), vec![1, 0, 2]);
/// ```
pub fn count<T: PartialEq>(input: &[T], queries: &[T]) -> Vec<usize> {
    queries
        .iter()
        .map(|query| input.iter().filter(|element| *element == query).count())
        .collect()
}
