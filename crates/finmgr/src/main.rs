use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use finmgr::{Cli, Config, Context, commands, init_logging};

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".finmgr")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);

    let config = Config::load_or_default(&data_dir);
    let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    init_logging(&data_dir, level)?;

    let ctx = Context {
        config,
        json: cli.json,
    };

    let output = commands::run(&cli.command, &ctx, &data_dir).inspect_err(|err| {
        tracing::error!("{err:#}");
    })?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
