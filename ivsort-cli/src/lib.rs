//! ivsort CLI library
//!
//! This library provides the command-line interface for sorting pointed
//! Hebrew word lists with `ivsort-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
