use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::convert;
use crate::journal::RunContext;
use crate::rabobank::posting::Accounts;

#[derive(Debug, Args)]
#[group(id = "ConvertCommand")]
pub struct Command {
    /// Rabobank CSV exports to convert. Each is written to
    /// "<input without extension>#<account>.journal" for every account it
    /// contains, replacing any journal left from an earlier run.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    #[command(flatten)]
    accounts: Accounts,
}

impl Command {
    pub fn run(&self) -> Result<()> {
        self.run_with_summary(&mut io::stdout().lock())
    }

    /// Converts every input, writing `<input>: <account>, ...` per input to
    /// `summary`.
    fn run_with_summary<W: Write>(&self, summary: &mut W) -> Result<()> {
        let mut ctx = RunContext::new();
        for input in &self.inputs {
            let found = convert::convert_file(input, &self.accounts, &mut ctx)?;
            writeln!(summary, "{}: {}", input.display(), found.join(", "))?;
        }
        Ok(())
    }
}
