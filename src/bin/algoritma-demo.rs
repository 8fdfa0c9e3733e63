//! The demonstration binary for the algoritma crate.
//!
//! Runs the four sample exercises through the bridge facade and prints each
//! output line followed by a blank line, reproducing the original program's
//! console transcript. Logging goes to stderr and is controlled by the
//! `RUST_LOG` environment variable; stdout carries only the transcript.

use algoritma::{bridge, AlgoritmaError};
use log::info;

fn main() -> Result<(), AlgoritmaError> {
    env_logger::init();
    info!("algoritma-demo v{} starting sample suite", algoritma::VERSION);

    for line in bridge::run_sample_suite()? {
        println!("{}", line);
        println!();
    }
    Ok(())
}
