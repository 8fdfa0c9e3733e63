//! This module gathers the pure, stateless algorithm kernels. Each kernel
//! lives in its own file, owns its contract, and carries its own unit tests.
//! None of them share state; each call derives a fresh value from its input.

pub mod count;
pub mod diagonal;
pub mod longest;
pub mod reverse_string;

pub use count::count;
pub use diagonal::diagonal;
pub use longest::longest;
pub use reverse_string::reverse_string;
