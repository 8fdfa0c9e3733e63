//! This module contains the pure, stateless kernel for longest-word lookup.
//!
//! The sentence is split on Unicode whitespace and scanned once. A word only
//! replaces the running winner when its length *strictly* exceeds the current
//! maximum, so ties always resolve to the earliest occurrence. Length is
//! measured in `char`s, not bytes, so multi-byte words are compared fairly.

//==================================================================================
// 1. Public API
//==================================================================================

/// Finds the first word of maximum length in `sentence` and renders it as
/// `"<word>: <length> character"`.
///
/// The unit is always the singular "character", regardless of the count. The
/// wording is preserved verbatim from the original exercise for output
/// compatibility. A sentence with no words yields `": 0 character"`.
///
/// # Example
/// ```
/// use algoritma::kernels::longest;
/// assert_eq!(
///     longest("Saya sangat senang mengerjakan soal algoritma"),
///     "mengerjakan: 11 character"
/// );
/// ```
pub fn longest(sentence: &str) -> String {
    let mut longest_word = "";
    let mut max_length = 0;

    for word in sentence.split_whitespace() {
        let length = word.chars().count();
        if length > max_length {
            longest_word = word;
            max_length = length;
        }
    }
    format!("{}: {} character", longest_word, max_length)
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_canonical_sample() {
        assert_eq!(
            longest("Saya sangat senang mengerjakan soal algoritma"),
            "mengerjakan: 11 character"
        );
    }

    #[test]
    fn test_longest_empty_sentence() {
        assert_eq!(longest(""), ": 0 character");
    }

    #[test]
    fn test_longest_whitespace_only_sentence() {
        // split_whitespace yields no words, same as the empty sentence.
        assert_eq!(longest("   \t  "), ": 0 character");
    }

    #[test]
    fn test_longest_tie_keeps_earlier_word() {
        // "aaa" and "bbb" tie at 3; strict > keeps the first.
        assert_eq!(longest("aaa bbb cc"), "aaa: 3 character");
    }

    #[test]
    fn test_longest_single_word() {
        assert_eq!(longest("word"), "word: 4 character");
    }

    #[test]
    fn test_longest_length_counts_chars_not_bytes() {
        // "héé" is 5 bytes but 3 chars, so "four" wins.
        assert_eq!(longest("héé four"), "four: 4 character");
    }

    #[test]
    fn test_longest_collapses_repeated_whitespace() {
        assert_eq!(longest("a    bb \t ccc"), "ccc: 3 character");
    }
}
