use std::fmt;

use crate::money::Amount;

/// A journal entry: a header line followed by indented postings and a
/// blank separator line.
pub struct Entry {
    pub header: String,
    pub postings: Vec<Posting>,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        writeln!(f, "{}", self.header)?;
        for p in &self.postings {
            writeln!(f, "  {}", p)?;
        }
        writeln!(f)
    }
}

pub struct Posting {
    pub account: String,
    pub commodity: &'static str,
    pub amount: Amount,
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}  {} {}", self.account, self.commodity, self.amount)
    }
}
