use anyhow::Result;
use clap::Parser;

#[cfg(test)]
mod testutil;

mod convert;
mod fmt;
mod journal;
mod money;
mod output;
mod rabobank;

#[derive(Debug, Parser)]
#[command(arg_required_else_help = true)]
/// Converts Rabobank CSV exports into Ledger journals, one per account.
struct Command {
    #[command(flatten)]
    convert: convert::cmd::Command,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cmd = Command::parse();
    cmd.convert.run()
}
