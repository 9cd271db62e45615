use itertools::Itertools;

use crate::rabobank::field;

/// A complete, schema-valid record.
pub fn sample_fields() -> Vec<String> {
    let mut fields = vec![String::new(); field::COUNT];
    for (i, v) in [
        (field::ACCOUNT, "NL00RABO0123456789"),
        (field::CURRENCY, "EUR"),
        (field::BIC, "RABONL2U"),
        (field::SEQUENCE, "000000000000012345"),
        (field::DATE, "2018-01-02"),
        (field::VALUE_DATE, "2018-01-02"),
        (field::AMOUNT, "-25,00"),
        (field::BALANCE, "+1000,50"),
        (field::COUNTER_ACCOUNT, "NL11BANK0987654321"),
        (field::COUNTER_NAME, "Energy Co"),
        (field::COUNTER_BIC, "BANKNL2A"),
        (field::CODE, "id"),
        (field::MANDATE_REF, "MNDT-7"),
        (field::CREDITOR_ID, "NL98ZZZ999999990000"),
        (field::DESCRIPTION_1, "Invoice 42 "),
        (field::DESCRIPTION_2, "January"),
    ] {
        fields[i] = v.to_string();
    }
    fields
}

/// A record with only the given columns filled in.
pub fn fields_with(values: &[(usize, &str)]) -> Vec<String> {
    let mut fields = vec![String::new(); field::COUNT];
    for (i, v) in values {
        fields[*i] = v.to_string();
    }
    fields
}

/// Formats `fields` the way the bank exports them.
pub fn record_line<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| format!("\"{}\"", f.as_ref()))
        .join(",")
}

pub const HEADER_LINE: &str = "\"IBAN/BBAN\",\"Munt\",\"BIC\",\"Volgnr\",\"Datum\",\"Rentedatum\",\
\"Bedrag\",\"Saldo na trn\",\"Tegenrekening IBAN/BBAN\",\"Naam tegenpartij\",\
\"Naam uiteindelijke partij\",\"Naam initiërende partij\",\"BIC tegenpartij\",\"Code\",\
\"Batch ID\",\"Transactiereferentie\",\"Machtigingskenmerk\",\"Incassant ID\",\
\"Betalingskenmerk\",\"Omschrijving-1\",\"Omschrijving-2\",\"Omschrijving-3\",\
\"Reden retour\",\"Oorspr bedrag\",\"Oorspr munt\",\"Koers\"";

#[macro_export]
macro_rules! assert_text_eq {
    ($want:expr, $got:expr, $($context_arg:expr),*) => {
        let want = $want;
        let got = $got;
        let want_str: &str = want.as_ref();
        let got_str: &str = got.as_ref();
        if want_str != got_str {
            eprintln!($($context_arg,)*);
            text_diff::assert_diff(want_str, got_str, "\n", 0);
        }
    };
    ($want:expr, $got:expr) => {
        let want = $want;
        let got = $got;
        let want_str: &str = want.as_ref();
        let got_str: &str = got.as_ref();
        if want_str != got_str {
            text_diff::assert_diff(want_str, got_str, "\n", 0);
        }
    };
}
