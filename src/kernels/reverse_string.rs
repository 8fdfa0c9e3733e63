//! This module contains the pure, stateless kernel for letter-reversal with
//! digit preservation.
//!
//! The input string is partitioned into its alphabetic and numeric characters;
//! everything else (whitespace, punctuation) is dropped from the output
//! entirely. Only the alphabetic run is reversed. The numeric run is appended
//! afterwards in its original order.
//!
//! Character classes are the Unicode categories exposed by the standard
//! library: `char::is_alphabetic` (letters) and `char::is_numeric` (numbers).
//! The exact class boundaries are part of the contract since they decide
//! which characters survive into the output.

//==================================================================================
// 1. Private Core Logic
//==================================================================================

/// Splits `text` into its letter sequence and its digit sequence, preserving
/// the original order within each.
fn partition_alnum(text: &str) -> (Vec<char>, String) {
    let mut letters = Vec::new();
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_alphabetic() {
            letters.push(ch);
        } else if ch.is_numeric() {
            digits.push(ch);
        }
    }
    (letters, digits)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Reverses the alphabetic characters of `text` and appends its numeric
/// characters unreversed. Total over all inputs; the empty string maps to
/// the empty string.
///
/// # Example
/// ```
/// use algoritma::kernels::reverse_string;
/// assert_eq!(reverse_string("NEGIE1"), "EIGEN1");
/// ```
pub fn reverse_string(text: &str) -> String {
    let (letters, digits) = partition_alnum(text);
    let mut result: String = letters.into_iter().rev().collect();
    result.push_str(&digits);
    result
}
