// In: src/bridge/stateless_api.rs

use log::debug;

use crate::error::AlgoritmaError;
use crate::kernels;

/// The fixed sample inputs of the original exercise, in presentation order.
const REVERSE_SAMPLE: &str = "NEGIE1";
const LONGEST_SAMPLE: &str = "Saya sangat senang mengerjakan soal algoritma";
const COUNT_INPUT_SAMPLE: [&str; 4] = ["xc", "dz", "bbb", "dz"];
const COUNT_QUERY_SAMPLE: [&str; 3] = ["bbb", "ac", "dz"];

/// Runs all four kernels once against the canonical sample inputs and returns
/// the four output lines in their fixed order.
///
/// The kernels are independent and stateless, so the only ordering that
/// matters is the presentation order of the returned lines. `diagonal` is the
/// sole fallible call; with the baked-in 3×3 sample it cannot fail, but the
/// error is propagated rather than unwrapped so the facade stays total over
/// its own contract.
pub fn run_sample_suite() -> Result<Vec<String>, AlgoritmaError> {
    let mut lines = Vec::with_capacity(4);

    // Question 1: letter reversal with digit preservation.
    let reversed = kernels::reverse_string(REVERSE_SAMPLE);
    debug!("reverse_string({:?}) -> {:?}", REVERSE_SAMPLE, reversed);
    lines.push(reversed);

    // Question 2: longest-word lookup.
    let longest = kernels::longest(LONGEST_SAMPLE);
    debug!("longest({:?}) -> {:?}", LONGEST_SAMPLE, longest);
    lines.push(longest);

    // Question 3: element-frequency counting. The counts are rendered with
    // the Debug list format, e.g. `[1, 0, 2]`.
    let counts = kernels::count(&COUNT_INPUT_SAMPLE, &COUNT_QUERY_SAMPLE);
    debug!(
        "count({:?}, {:?}) -> {:?}",
        COUNT_INPUT_SAMPLE, COUNT_QUERY_SAMPLE, counts
    );
    lines.push(format!("{:?}", counts));

    // Question 4: matrix diagonal-sum comparison.
    let matrix = vec![vec![1_i64, 2, 0], vec![4, 5, 6], vec![7, 8, 9]];
    let rendered = kernels::diagonal(&matrix)?;
    debug!("diagonal(3x3 sample) -> {:?}", rendered);
    lines.push(rendered);

    Ok(lines)
}
