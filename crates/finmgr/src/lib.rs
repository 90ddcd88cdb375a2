//! Command-line front end for finmgr_core
//!
//! Reads loans, incomes, stock holdings and budgets from JSON files or
//! flags, runs the calculations and prints the results as an aligned table
//! or as JSON. Settings live in `~/.finmgr/config.yaml` and logs in
//! `~/.finmgr/finmgr.log`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod input;
pub mod io;
pub mod logging;

pub use cli::{Cli, Command};
pub use commands::Context;
pub use config::{Config, OutputFormat};
pub use logging::init_logging;
