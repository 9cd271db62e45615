use lazy_static::lazy_static;
use regex::Regex;

use crate::rabobank::field;

/// Splits one export line into its field values: every double-quoted
/// substring, left to right, with the quotes removed.
///
/// Quotes inside a value are not supported and will shift the remaining
/// fields.
pub fn extract_fields(line: &str) -> Vec<String> {
    lazy_static! {
        static ref QUOTED: Regex = Regex::new(r#""([^"]*)""#).unwrap();
    }

    QUOTED
        .captures_iter(line)
        .map(|c| c[1].to_string())
        .collect()
}

/// The columns of a record that take part in forming a journal entry.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Transaction<'a> {
    pub account: &'a str,
    pub sequence: &'a str,
    pub date: &'a str,
    pub amount: &'a str,
    pub counter_account: &'a str,
    pub counter_name: &'a str,
    pub code: &'a str,
    pub descriptions: [&'a str; 3],
    pub mandate_ref: &'a str,
    pub creditor_id: &'a str,
    pub payment_ref: &'a str,
}

impl<'a> Transaction<'a> {
    /// Picks the relevant columns out of `fields`. Columns missing from a
    /// short record read as empty.
    pub fn from_fields<S: AsRef<str>>(fields: &'a [S]) -> Self {
        let get = move |i: usize| -> &'a str { fields.get(i).map_or("", |s| s.as_ref()) };
        Transaction {
            account: get(field::ACCOUNT),
            sequence: get(field::SEQUENCE),
            date: get(field::DATE),
            amount: get(field::AMOUNT),
            counter_account: get(field::COUNTER_ACCOUNT),
            counter_name: get(field::COUNTER_NAME),
            code: get(field::CODE),
            descriptions: [
                get(field::DESCRIPTION_1),
                get(field::DESCRIPTION_2),
                get(field::DESCRIPTION_3),
            ],
            mandate_ref: get(field::MANDATE_REF),
            creditor_id: get(field::CREDITOR_ID),
            payment_ref: get(field::PAYMENT_REF),
        }
    }
}
