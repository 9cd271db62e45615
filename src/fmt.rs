//! Text cleanup for values that end up in Ledger journal text.

use lazy_static::lazy_static;
use regex::Regex;

/// Token that replaces line breaks inside a single field.
const NEWLINE_REPLACEMENT: &str = " => ";

/// Characters that carry meaning in Ledger syntax (comments, tags, virtual
/// accounts, payee separator).
const STRUCTURAL_CHARS: &[char] = &[':', ';', '|', '[', ']'];

/// Makes `s` safe to place on a single journal line while keeping its case.
///
/// Blank input is returned untouched.
pub fn soft(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }

    lazy_static! {
        static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    }

    let replaced = s
        .replace('\n', NEWLINE_REPLACEMENT)
        .replace(STRUCTURAL_CHARS, " ");
    WHITESPACE.replace_all(replaced.trim(), " ").into_owned()
}

/// As `soft`, additionally lower-casing the result. Used where the value
/// becomes part of an account name.
pub fn full(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    soft(s).to_lowercase()
}

/// Rewrites a `YYYY-MM-DD` date into Ledger's `YYYY/MM/DD`.
pub fn date(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    s.replace('-', "/")
}
