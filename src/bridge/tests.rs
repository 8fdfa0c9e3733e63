use super::*;
use crate::kernels::{count, diagonal, longest, reverse_string};

#[test]
fn test_sample_suite_produces_canonical_transcript() {
    // 1. Act: Run the whole suite through the public facade.
    let lines = run_sample_suite().unwrap();

    // 2. Assert: Exactly the four canonical lines, in fixed order.
    assert_eq!(
        lines,
        vec![
            "EIGEN1".to_string(),
            "mengerjakan: 11 character".to_string(),
            "[1, 0, 2]".to_string(),
            "([1, 5, 9] = 15) - ([0, 5, 7] = 12) = 3".to_string(),
        ]
    );
}

#[test]
fn test_sample_suite_is_idempotent() {
    // Pure kernels, no hidden state: two runs agree line for line.
    let first = run_sample_suite().unwrap();
    let second = run_sample_suite().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_facade_matches_direct_kernel_calls() {
    let lines = run_sample_suite().unwrap();

    assert_eq!(lines[0], reverse_string("NEGIE1"));
    assert_eq!(
        lines[1],
        longest("Saya sangat senang mengerjakan soal algoritma")
    );

    let counts = count(&["xc", "dz", "bbb", "dz"], &["bbb", "ac", "dz"]);
    assert_eq!(lines[2], format!("{:?}", counts));

    let matrix = vec![vec![1_i64, 2, 0], vec![4, 5, 6], vec![7, 8, 9]];
    assert_eq!(lines[3], diagonal(&matrix).unwrap());
}
