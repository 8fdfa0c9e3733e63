//! This file is the root of the `algoritma` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`kernels`, `bridge`)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public API surface that the demonstration
//!     binary and downstream users consume.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod kernels;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use error::AlgoritmaError;
