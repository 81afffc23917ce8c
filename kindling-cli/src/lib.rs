//! Kindling CLI library
//!
//! This library provides the command-line interface for the Kindling
//! clipping import tool.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
