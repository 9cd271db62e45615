//! Declarative description of the 26 record columns, and a validator that
//! reports every way a record deviates from it.

use std::fmt;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::rabobank::field;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    AccountId,
    CurrencyCode,
    Bic,
    SequenceId,
    Date,
    Amount,
    FreeText,
}

impl FieldKind {
    fn pattern(self) -> &'static Regex {
        lazy_static! {
            static ref ACCOUNT_ID: Regex = Regex::new(r"^[A-Z0-9]+$").unwrap();
            static ref CURRENCY_CODE: Regex = Regex::new(r"^[A-Z]{3}$").unwrap();
            static ref BIC: Regex = Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$").unwrap();
            static ref SEQUENCE_ID: Regex = Regex::new(r"^\d+$").unwrap();
            static ref DATE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
            static ref AMOUNT: Regex = Regex::new(r"^[+-]?\d+(,\d+)?$").unwrap();
            static ref FREE_TEXT: Regex = Regex::new(r"(?s)^.*$").unwrap();
        }

        use FieldKind::*;
        match self {
            AccountId => &*ACCOUNT_ID,
            CurrencyCode => &*CURRENCY_CODE,
            Bic => &*BIC,
            SequenceId => &*SEQUENCE_ID,
            Date => &*DATE,
            Amount => &*AMOUNT,
            FreeText => &*FREE_TEXT,
        }
    }

    fn accepts(self, value: &str) -> bool {
        if !self.pattern().is_match(value) {
            return false;
        }
        match self {
            FieldKind::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            _ => true,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FieldKind::*;
        f.write_str(match self {
            AccountId => "account id",
            CurrencyCode => "currency code",
            Bic => "BIC",
            SequenceId => "sequence id",
            Date => "date",
            Amount => "amount",
            FreeText => "free text",
        })
    }
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub max_len: usize,
}

const fn spec(name: &'static str, kind: FieldKind, max_len: usize) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        max_len,
    }
}

/// Column definitions, indexed by `rabobank::field` positions.
pub static SCHEMA: [FieldSpec; field::COUNT] = {
    use FieldKind::*;
    [
        spec("IBAN/BBAN", AccountId, 34),
        spec("Munt", CurrencyCode, 3),
        spec("BIC", Bic, 11),
        spec("Volgnr", SequenceId, 18),
        spec("Datum", Date, 10),
        spec("Rentedatum", Date, 10),
        spec("Bedrag", Amount, 18),
        spec("Saldo na trn", Amount, 18),
        spec("Tegenrekening IBAN/BBAN", AccountId, 34),
        spec("Naam tegenpartij", FreeText, 70),
        spec("Naam uiteindelijke partij", FreeText, 70),
        spec("Naam initiërende partij", FreeText, 70),
        spec("BIC tegenpartij", Bic, 11),
        spec("Code", FreeText, 4),
        spec("Batch ID", FreeText, 35),
        spec("Transactiereferentie", FreeText, 35),
        spec("Machtigingskenmerk", FreeText, 35),
        spec("Incassant ID", FreeText, 35),
        spec("Betalingskenmerk", FreeText, 35),
        spec("Omschrijving-1", FreeText, 140),
        spec("Omschrijving-2", FreeText, 140),
        spec("Omschrijving-3", FreeText, 140),
        spec("Reden retour", FreeText, 75),
        spec("Oorspr bedrag", Amount, 18),
        spec("Oorspr munt", CurrencyCode, 3),
        spec("Koers", Amount, 18),
    ]
};

/// One way in which a record deviates from `SCHEMA`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    FieldCount {
        want: usize,
        got: usize,
    },
    TooLong {
        index: usize,
        name: &'static str,
        max_len: usize,
        len: usize,
    },
    BadFormat {
        index: usize,
        name: &'static str,
        kind: FieldKind,
        value: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use Violation::*;
        match self {
            FieldCount { want, got } => write!(f, "expected {} fields, got {}", want, got),
            TooLong {
                index,
                name,
                max_len,
                len,
            } => write!(
                f,
                "field {} ({}) is {} characters long, at most {} allowed",
                index + 1,
                name,
                len,
                max_len
            ),
            BadFormat {
                index,
                name,
                kind,
                value,
            } => write!(
                f,
                "field {} ({}) is not a valid {}: {:?}",
                index + 1,
                name,
                kind,
                value
            ),
        }
    }
}

/// Checks `fields` against `SCHEMA`. Blank values are always accepted by
/// the format check since most columns are optional.
pub fn validate<S: AsRef<str>>(fields: &[S]) -> Vec<Violation> {
    let mut violations = Vec::new();

    if fields.len() != SCHEMA.len() {
        violations.push(Violation::FieldCount {
            want: SCHEMA.len(),
            got: fields.len(),
        });
    }

    for (index, (value, spec)) in fields.iter().zip(SCHEMA.iter()).enumerate() {
        let value = value.as_ref();
        let len = value.chars().count();
        if len > spec.max_len {
            violations.push(Violation::TooLong {
                index,
                name: spec.name,
                max_len: spec.max_len,
                len,
            });
        }
        if !value.is_empty() && !spec.kind.accepts(value) {
            violations.push(Violation::BadFormat {
                index,
                name: spec.name,
                kind: spec.kind,
                value: value.to_string(),
            });
        }
    }

    violations
}
