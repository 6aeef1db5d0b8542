use clap::{Parser, Subcommand};

use self::{diff::DiffArg, sample::SampleArg};

mod counts;
mod diff;
mod sample;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize one binomial sample and its z-score table
    Sample(#[clap(flatten)] SampleArg),
    /// Test the difference between two binomial samples
    Diff(#[clap(flatten)] DiffArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Sample(arg) => sample::run(arg)?,
        Mode::Diff(arg) => diff::run(arg)?,
    }
    Ok(())
}
