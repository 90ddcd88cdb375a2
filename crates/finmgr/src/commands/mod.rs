//! One module per subcommand. Each returns the text to print so the binary
//! only has to write it out.

mod compare;
mod config;
mod history;
mod income;
mod loan;
mod portfolio;
mod savings;
mod summary;

use std::path::Path;

use serde::Serialize;

use crate::cli::{Command, ConfigAction};
use crate::config::{Config, OutputFormat};

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: Config,
    /// `--json` was passed
    pub json: bool,
}

impl Context {
    pub fn output(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.config.output
        }
    }

    fn render<T: Serialize>(
        &self,
        value: &T,
        table: impl FnOnce(&T) -> String,
    ) -> color_eyre::Result<String> {
        match self.output() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
            OutputFormat::Table => Ok(table(value)),
        }
    }
}

pub fn run(command: &Command, ctx: &Context, data_dir: &Path) -> color_eyre::Result<String> {
    tracing::debug!(?command, "running command");

    match command {
        Command::Loan(args) => loan::run(args, ctx),
        Command::Compare(args) => compare::run(args, ctx),
        Command::Income(args) => income::run(args, ctx),
        Command::Portfolio(args) => portfolio::run(args, ctx),
        Command::History(args) => history::run(args, ctx),
        Command::Savings(args) => savings::run(args, ctx),
        Command::Summary(args) => summary::run(args, ctx),
        Command::Config {
            action: ConfigAction::Init { force },
        } => config::init(data_dir, *force),
    }
}
