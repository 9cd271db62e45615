//! Routing of generated entries into per-account journal files.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const JOURNAL_EXTENSION: &str = "journal";

/// Output journal for entries of `account` read from `input`:
/// `<input without extension>#<account>.journal`.
pub fn journal_path(input: &Path, account: &str) -> PathBuf {
    let mut s: OsString = input.with_extension("").into_os_string();
    s.push("#");
    s.push(account);
    s.push(".");
    s.push(JOURNAL_EXTENSION);
    PathBuf::from(s)
}

/// State shared by all inputs converted in a single run.
///
/// Each journal is emptied the first time it is written to in a run and
/// appended to afterwards, so entries from several inputs for the same
/// account accumulate rather than overwrite each other.
#[derive(Debug, Default)]
pub struct RunContext {
    seen: HashSet<PathBuf>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` to the journal for `account`, removing whatever the
    /// journal held before this run on first use.
    pub fn route<'a>(
        &mut self,
        input: &Path,
        account: &'a str,
        text: &str,
    ) -> Result<&'a str> {
        let path = journal_path(input, account);

        if !self.seen.contains(&path) {
            match fs::remove_file(&path) {
                Ok(()) => log::debug!("removed existing journal {:?}", path),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("removing existing journal {:?}", path))
                }
            }
            self.seen.insert(path.clone());
        }

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {:?} for appending", path))?;
        f.write_all(text.as_bytes())
            .with_context(|| format!("writing to {:?}", path))?;

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case("statements/export.csv", "NL00RABO0123456789" => PathBuf::from("statements/export#NL00RABO0123456789.journal"); "csv")]
    #[test_case("export", "NL01" => PathBuf::from("export#NL01.journal"); "no_extension")]
    #[test_case("export.2018.csv", "NL01" => PathBuf::from("export.2018#NL01.journal"); "only_last_extension")]
    #[test_case("export.csv", "" => PathBuf::from("export#.journal"); "empty_account")]
    fn test_journal_path(input: &str, account: &str) -> PathBuf {
        journal_path(Path::new(input), account)
    }

    #[test]
    fn existing_journal_removed_once() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("export.csv");
        let journal = dir.path().join("export#NL01.journal");
        fs::write(&journal, "sentinel\n").expect("write sentinel");

        let mut ctx = RunContext::new();
        assert_eq!("NL01", ctx.route(&input, "NL01", "first\n").unwrap());
        assert_eq!("NL01", ctx.route(&input, "NL01", "second\n").unwrap());

        assert_eq!("first\nsecond\n", fs::read_to_string(&journal).unwrap());
    }

    #[test]
    fn shared_across_inputs() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input_csv = dir.path().join("export.csv");
        let input_txt = dir.path().join("export.txt");
        let journal = dir.path().join("export#NL01.journal");
        fs::write(&journal, "sentinel\n").expect("write sentinel");

        let mut ctx = RunContext::new();
        ctx.route(&input_csv, "NL01", "first\n").unwrap();
        ctx.route(&input_txt, "NL01", "second\n").unwrap();

        assert_eq!("first\nsecond\n", fs::read_to_string(&journal).unwrap());
    }

    #[test]
    fn new_run_starts_over() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("export.csv");
        let journal = dir.path().join("export#NL01.journal");

        RunContext::new().route(&input, "NL01", "old\n").unwrap();
        RunContext::new().route(&input, "NL01", "new\n").unwrap();

        assert_eq!("new\n", fs::read_to_string(&journal).unwrap());
    }

    #[test]
    fn accounts_kept_apart() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("export.csv");

        let mut ctx = RunContext::new();
        ctx.route(&input, "NL01", "one\n").unwrap();
        ctx.route(&input, "NL02", "two\n").unwrap();

        assert_eq!(
            "one\n",
            fs::read_to_string(dir.path().join("export#NL01.journal")).unwrap()
        );
        assert_eq!(
            "two\n",
            fs::read_to_string(dir.path().join("export#NL02.journal")).unwrap()
        );
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("missing").join("export.csv");

        assert!(RunContext::new().route(&input, "NL01", "text\n").is_err());
    }
}
