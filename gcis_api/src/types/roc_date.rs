//! Republic-of-China calendar dates as the registry writes them.

use chrono::NaiveDate;

/// Offset between ROC years (民國) and Gregorian years.
const ROC_YEAR_OFFSET: i32 = 1911;

/// Parses a `YYYMMDD` ROC date such as `0680718` (1979-07-18).
///
/// Returns `None` for empty strings (the registry's "no date") and for
/// anything that is not seven digits forming a valid calendar date.
pub fn parse_roc_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() != 7 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[..3].parse().ok()?;
    let month: u32 = s[3..5].parse().ok()?;
    let day: u32 = s[5..].parse().ok()?;
    NaiveDate::from_ymd_opt(year + ROC_YEAR_OFFSET, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roc_dates() {
        assert_eq!(parse_roc_date("0680718"), NaiveDate::from_ymd_opt(1979, 7, 18));
        assert_eq!(parse_roc_date("1071128"), NaiveDate::from_ymd_opt(2018, 11, 28));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert_eq!(parse_roc_date(""), None);
        assert_eq!(parse_roc_date("680718"), None);
        assert_eq!(parse_roc_date("1071332"), None);
        assert_eq!(parse_roc_date("10711a8"), None);
    }
}
