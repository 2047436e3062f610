//! Amount and date conversions for the command line
//!
//! Amounts travel as integer cents and are shown with two decimals and
//! thousands separators. Dates travel as milliseconds since the epoch and are
//! entered as `YYYY-MM-DD` (midnight UTC).

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// `109500` -> `$1,095.00`
pub fn format_amount(cents: i64, symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}{}.{:02}", sign, symbol, grouped, cents % 100)
}

/// `"1,095.5"` -> `109550`
pub fn parse_amount(input: &str) -> Result<i64> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        bail!("Amount is empty");
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        bail!("Invalid amount '{}', expected e.g. 12.50", input.trim());
    }
    if fraction.len() > 2 {
        bail!("Amount '{}' has more than two decimals", input.trim());
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .with_context(|| format!("Amount '{}' is too large", input.trim()))?
    };
    let fraction: i64 = format!("{:0<2}", fraction).parse().unwrap_or(0);

    whole
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(fraction))
        .with_context(|| format!("Amount '{}' is too large", input.trim()))
}

/// `"1970-01-05"` -> `345600000`
pub fn parse_date(input: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT)
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", input.trim()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("Midnight is always a valid time")?;
    Ok(midnight.and_utc().timestamp_millis())
}

/// `345600000` -> `Jan 5, 1970`
pub fn format_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| millis.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0, "$"), "$0.00");
        assert_eq!(format_amount(195, "$"), "$1.95");
        assert_eq!(format_amount(109500, "$"), "$1,095.00");
        assert_eq!(format_amount(123456789, "€"), "€1,234,567.89");
        assert_eq!(format_amount(-4500, "$"), "-$45.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("30").unwrap(), 3000);
        assert_eq!(parse_amount("30.5").unwrap(), 3050);
        assert_eq!(parse_amount("1,095.00").unwrap(), 109500);
        assert_eq!(parse_amount(".99").unwrap(), 99);
        assert_eq!(parse_amount(" 0.07 ").unwrap(), 7);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12.345").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("99999999999999999999").is_err());
    }

    #[test]
    fn test_dates() {
        assert_eq!(parse_date("1970-01-01").unwrap(), 0);
        assert_eq!(parse_date("1970-01-05").unwrap(), 4 * 24 * 60 * 60 * 1000);
        assert!(parse_date("05/01/1970").is_err());
        assert_eq!(format_date(4 * 24 * 60 * 60 * 1000), "Jan 5, 1970");
        assert_eq!(format_date(-4 * 24 * 60 * 60 * 1000), "Dec 28, 1969");
    }
}
