//! Command-line front end for mapcel.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
