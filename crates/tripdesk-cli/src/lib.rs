//! Shared plumbing for the `datecalc` and `flightsearch` binaries.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
