//! Display formatting and parsing of amounts and dates.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Date format shown in tables and detail views.
pub const DISPLAY_DATE: &str = "%m/%d/%Y";
/// Sortable date format used in row fields.
pub const ROW_DATE: &str = "%Y-%m-%d";

/// Format `amount` as US dollars with thousands separators.
///
/// ```
/// use casebook_data::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(1250000, 2)), "$12,500.00");
/// assert_eq!(format_currency(Decimal::new(-505, 1)), "-$50.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse an amount such as `"12,500.00 USD"` or `"$980"`.
///
/// Separators, currency symbols and units are stripped; anything that still
/// fails to parse reads as zero.
pub fn parse_amount(s: &str) -> Decimal {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(Decimal::ZERO)
}

/// Format a date as `MM/DD/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}

/// Format a date for a sortable row field.
pub fn row_date(date: NaiveDate) -> String {
    date.format(ROW_DATE).to_string()
}

/// Parse `MM/DD/YYYY` or `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DISPLAY_DATE)
        .or_else(|_| NaiveDate::parse_from_str(s, ROW_DATE))
        .ok()
}

/// Re-format a sortable row date for display, leaving other text untouched.
pub fn display_row_date(s: &str) -> String {
    match NaiveDate::parse_from_str(s, ROW_DATE) {
        Ok(date) => format_date(date),
        Err(_) => s.to_string(),
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Serde helpers for the fixture formats.
pub(crate) mod serde_fmt {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(d)?;
        super::parse_date(&s).ok_or_else(|| D::Error::custom(format!("invalid date '{}'", s)))
    }

    pub fn optional_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => super::parse_date(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", s))),
        }
    }

    pub fn amount<'de, D: Deserializer<'de>>(d: D) -> Result<Decimal, D::Error> {
        let s = String::deserialize(d)?;
        Ok(super::parse_amount(&s))
    }
}
