//! # Glo CLI Library
//!
//! Command definitions, configuration and output formatting for the `glo`
//! command-line tool.

pub mod cli;
pub mod clients;
pub mod config;
pub mod consts;
pub mod output;
