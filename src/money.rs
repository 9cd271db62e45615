use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

/// A signed monetary quantity as exported by the bank.
///
/// Keeps the exported text (decimal comma normalised to a point) so that
/// the bank's own side of a posting is written exactly as it was given,
/// explicit sign included.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Amount {
    text: String,
    value: Decimal,
}

impl Amount {
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The exact arithmetic negation of this amount.
    pub fn negated(&self) -> Amount {
        let mut value = -self.value;
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Amount {
            text: value.to_string(),
            value,
        }
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lazy_static! {
            static ref NUMBER: Regex = Regex::new(r"^[+-]?\d+(\.\d+)?$").unwrap();
        }

        let text = s.trim().replace(',', ".");
        if !NUMBER.is_match(&text) {
            bail!("invalid amount {:?}", s);
        }
        let unsigned = text.strip_prefix('+').unwrap_or(&text);
        let value = Decimal::from_str(unsigned)
            .with_context(|| format!("invalid amount {:?}", s))?;
        Ok(Amount { text, value })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.text)
    }
}
