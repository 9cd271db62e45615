use itertools::Itertools;

use crate::fmt;
use crate::rabobank::record::Transaction;

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Builds the memo text for a transaction:
///
/// `[<counter account>] <payment reference> <descriptions> <mandate> <creditor>`
///
/// where each part is left out when blank. The result is not yet
/// sanitized; see `sanitized`.
pub fn compose(trn: &Transaction) -> String {
    let body = trn.descriptions.concat().trim().to_string();

    let extra = [trn.mandate_ref, trn.creditor_id]
        .into_iter()
        .filter(|s| !is_blank(s))
        .join(" ")
        .trim()
        .to_string();

    let mut memo = body;
    if !is_blank(&extra) {
        memo.push(' ');
        memo.push_str(&extra);
    }

    if !is_blank(trn.payment_ref) {
        memo = format!("{} {}", trn.payment_ref, memo);
    }

    if !is_blank(trn.counter_account) {
        memo = format!("[{}] {}", trn.counter_account, memo);
    }

    memo
}

/// The memo as it appears in a journal entry header.
pub fn sanitized(trn: &Transaction) -> String {
    fmt::soft(&compose(trn))
}
