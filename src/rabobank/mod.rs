//! Rabobank SEPA CSV export format.

pub mod description;
pub mod posting;
pub mod record;
pub mod schema;

pub const ASSET_ACCOUNT: &str = "asset:rabobank:betaalrekening";
pub const IMPORT_ACCOUNT_PREFIX: &str = "equity:import:rabobank:";
pub const COMMODITY: &str = "EUR";

/// Column positions within a record. Not every column is read.
#[allow(dead_code)]
pub mod field {
    pub const ACCOUNT: usize = 0;
    pub const CURRENCY: usize = 1;
    pub const BIC: usize = 2;
    pub const SEQUENCE: usize = 3;
    pub const DATE: usize = 4;
    pub const VALUE_DATE: usize = 5;
    pub const AMOUNT: usize = 6;
    pub const BALANCE: usize = 7;
    pub const COUNTER_ACCOUNT: usize = 8;
    pub const COUNTER_NAME: usize = 9;
    pub const ULTIMATE_NAME: usize = 10;
    pub const INITIATING_NAME: usize = 11;
    pub const COUNTER_BIC: usize = 12;
    pub const CODE: usize = 13;
    pub const BATCH_ID: usize = 14;
    pub const TRANSACTION_REF: usize = 15;
    pub const MANDATE_REF: usize = 16;
    pub const CREDITOR_ID: usize = 17;
    pub const PAYMENT_REF: usize = 18;
    pub const DESCRIPTION_1: usize = 19;
    pub const DESCRIPTION_2: usize = 20;
    pub const DESCRIPTION_3: usize = 21;
    pub const RETURN_REASON: usize = 22;
    pub const ORIGINAL_AMOUNT: usize = 23;
    pub const ORIGINAL_CURRENCY: usize = 24;
    pub const EXCHANGE_RATE: usize = 25;

    pub const COUNT: usize = 26;
}
