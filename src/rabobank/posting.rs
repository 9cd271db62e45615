use anyhow::{Context, Result};
use clap::Args;

use crate::fmt;
use crate::money::Amount;
use crate::output::{Entry, Posting};
use crate::rabobank::record::Transaction;
use crate::rabobank::{description, ASSET_ACCOUNT, COMMODITY, IMPORT_ACCOUNT_PREFIX};

/// Accounts that the generated postings are booked against.
#[derive(Clone, Debug, Args)]
pub struct Accounts {
    /// The account representing the bank account itself.
    #[arg(long = "asset-account", default_value = ASSET_ACCOUNT)]
    pub asset: String,
    /// Prefix of the balancing account. The transaction code of each record
    /// is appended to it.
    #[arg(long = "import-account-prefix", default_value = IMPORT_ACCOUNT_PREFIX)]
    pub import_prefix: String,
}

impl Default for Accounts {
    fn default() -> Self {
        Accounts {
            asset: ASSET_ACCOUNT.to_string(),
            import_prefix: IMPORT_ACCOUNT_PREFIX.to_string(),
        }
    }
}

/// Forms the journal entry for a single transaction.
///
/// Fails only if the amount is not a number.
pub fn form_entry(trn: &Transaction, accounts: &Accounts) -> Result<Entry> {
    let amount: Amount = trn
        .amount
        .parse()
        .with_context(|| format!("transaction {:?} on {}", trn.sequence, trn.date))?;
    let peer_amount = amount.negated();
    debug_assert!((amount.value() + peer_amount.value()).is_zero());

    let mut header = format!("{} !", fmt::date(trn.date));
    if !trn.sequence.trim().is_empty() {
        header.push_str(&format!(" ({})", trn.sequence));
    }
    let name = fmt::soft(trn.counter_name);
    let memo = description::sanitized(trn);
    let name = name.trim();
    let memo = memo.trim();
    match (name.is_empty(), memo.is_empty()) {
        (false, false) => header.push_str(&format!(" {} | {}", name, memo)),
        (false, true) => header.push_str(&format!(" {}", name)),
        (true, false) => header.push_str(&format!(" {}", memo)),
        (true, true) => {}
    }

    Ok(Entry {
        header,
        postings: vec![
            Posting {
                account: accounts.asset.clone(),
                commodity: COMMODITY,
                amount,
            },
            Posting {
                account: format!("{}{}", accounts.import_prefix, fmt::full(trn.code)),
                commodity: COMMODITY,
                amount: peer_amount,
            },
        ],
    })
}
