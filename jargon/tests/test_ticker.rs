//! End-to-end use of the prelude: decoding and building futures tickers.

use chrono::NaiveDate;
use jargon::prelude::*;

/// Split a ticker such as `"CLZ4"` into root, month code and year digit.
fn split_ticker(ticker: &str) -> Option<(&str, char, char)> {
    let mut tail = ticker.char_indices().rev();
    let (_, year) = tail.next()?;
    let (i, month) = tail.next()?;
    Some((&ticker[..i], month, year))
}

#[test]
fn decode_ticker() {
    let (root, code, year) = split_ticker("CLZ4").unwrap();
    assert_eq!(root, "CL");
    assert_eq!(year, '4');
    assert_eq!(month_from_month_char(code).unwrap(), "December");
    assert_eq!(month_number_from_month_char(code).unwrap(), "12");
    assert_eq!(exchange_name_from_code("NYM").unwrap(), "CME");
}

#[test]
fn build_ticker_from_date() {
    let expiry = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
    let ticker = format!("ES{}{}", month_char_from_date(expiry), 5);
    assert_eq!(ticker, "ESH5");
    assert_eq!(MonthCode::from(expiry.month_of_year()).to_string(), "H");
}

#[test]
fn errors_share_one_type() {
    let errs: Vec<Error> = vec![
        exchange_name_from_code("LME").unwrap_err(),
        month_from_short_month("Sept").unwrap_err(),
        month_from_month_number("13").unwrap_err(),
    ];
    assert!(errs[0].is_not_found());
    assert!(errs[1].is_invalid_argument());
    assert!(errs[2].is_not_found());
}

#[test]
fn converters_match_free_functions() {
    let c = Converters::new();
    for month in Month::ALL {
        assert_eq!(
            c.short_month_from_month_char(month.code()),
            short_month_from_month_char(month.code())
        );
        assert_eq!(c.month_from_date(month), month_from_date_default(month));
    }
}
