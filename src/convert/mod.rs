//! Conversion of whole export files into journals.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::journal::RunContext;
use crate::rabobank::posting::{self, Accounts};
use crate::rabobank::record::{self, Transaction};
use crate::rabobank::schema;

pub mod cmd;

/// Converts the export at `input`, writing entries next to it. Returns the
/// accounts found, in order of first appearance.
pub fn convert_file(
    input: &Path,
    accounts: &Accounts,
    ctx: &mut RunContext,
) -> Result<Vec<String>> {
    log::info!("converting {:?}", input);
    let reader = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding_rs::UTF_8))
        .build(File::open(input).with_context(|| format!("opening {:?} for reading", input))?);
    convert_reader(BufReader::new(reader), input, accounts, ctx)
}

/// As `convert_file`, reading the export from `reader`. `input` names the
/// export for journal paths and diagnostics.
pub fn convert_reader<R: BufRead>(
    reader: R,
    input: &Path,
    accounts: &Accounts,
    ctx: &mut RunContext,
) -> Result<Vec<String>> {
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header.with_context(|| format!("reading header of {:?}", input))?;
        }
        None => {
            log::warn!("{:?} is empty", input);
            return Ok(Vec::new());
        }
    }

    let mut found = Vec::new();
    // Line numbers are 1-based and the header is line 1.
    for (line_num, line) in (2..).zip(lines) {
        let line = line.with_context(|| format!("reading {:?} line {}", input, line_num))?;
        if line.trim().is_empty() {
            log::debug!("{:?} line {}: skipping blank line", input, line_num);
            continue;
        }

        let fields = record::extract_fields(&line);
        let violations = schema::validate(&fields);
        if !violations.is_empty() {
            log::warn!(
                "{:?} line {}: record does not match the export format: {}",
                input,
                line_num,
                violations.iter().join("; ")
            );
        }

        let trn = Transaction::from_fields(&fields);
        let entry = posting::form_entry(&trn, accounts)
            .with_context(|| format!("{:?} line {}", input, line_num))?;
        let account = ctx.route(input, trn.account, &entry.to_string())?;
        found.push(account.to_string());
    }

    Ok(found.into_iter().unique().collect())
}
