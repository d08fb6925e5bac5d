//! Library surface of the benchset command-line interface.
//!
//! Exposes argument parsing, command execution, and logging setup so the
//! binary entry point stays thin and the commands remain testable.

pub mod cli;
pub mod logging;
