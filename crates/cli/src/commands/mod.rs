//! CLI command implementations.
//!
//! Each command writes plain text to the given writer so it can be tested
//! without a terminal.

pub mod browse;
pub mod orders;
pub mod routes;
pub mod seed;
