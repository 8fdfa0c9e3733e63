// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the algoritma library. It sits
// between the outside world (the demonstration binary, downstream callers) and
// the pure kernels, and it owns the one thing the kernels must not know about:
// the canonical sample inputs and their fixed presentation order.
//
// Data Flow:
//
//   1. [Demo Binary (algoritma-demo)]    -> calls `run_sample_suite()`
//         |
//   2. [Stateless API (run_sample_suite)] -> invokes each kernel once against
//         |                                 its baked-in sample input
//         |
//   3. [Kernels (kernels::*)]            -> return derived values; only
//                                           `diagonal` is fallible
//
// The suite returns the four rendered output lines so that callers decide how
// to present them (the binary prints each followed by a blank line, the
// integration tests assert on them verbatim).
//

mod stateless_api;

#[cfg(test)]
mod tests;

pub use stateless_api::run_sample_suite;
