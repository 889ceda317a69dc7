//! Teleprompter - scroll a speech in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use teleprompter::{terminal, Config, Session};

#[derive(Parser, Debug)]
#[command(name = "teleprompter", version, about = "Scroll a speech for a presenter to read")]
struct Cli {
    /// Which .txt file shall I present?
    #[arg(short, long, default_value = "speech.txt")]
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::default();

    let session = Session::open(&cli.file, &config).inspect_err(|e| log::error!("{e}"))?;
    terminal::present(session, config).context("teleprompter window failed")?;
    Ok(())
}
