//! Display formatters
//!
//! Pure conversions from raw backend values to display strings. None of
//! these fail: unusable input falls back to a marked placeholder.

use alloy_primitives::U256;
use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

/// Placeholder for an absent field
pub const NA: &str = "N/A";

/// Sentinel for a timestamp that cannot be turned into a date
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// 10^14 wei, i.e. one unit of the fourth ether decimal
const WEI_PER_TEN_THOUSANDTH: u64 = 100_000_000_000_000;

/// Time zone used to render transaction timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeDisplay {
    #[default]
    Local,
    Utc,
}

/// Convert a base-10 wei string to ether with exactly four decimals.
///
/// Rounds half up on the magnitude. A leading `-` is kept for non-zero
/// values, so `-5` wei renders as `-0.0000`. Returns `None` for anything
/// that is not an integer whose magnitude fits in 256 bits.
pub fn wei_to_ether(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let wei = U256::from_str_radix(digits, 10).ok()?;

    let unit = U256::from(WEI_PER_TEN_THOUSANDTH);
    let mut scaled = wei / unit;
    if wei % unit >= unit / U256::from(2u8) {
        scaled += U256::from(1u8);
    }

    let ten_thousand = U256::from(10_000u64);
    let whole = scaled / ten_thousand;
    let frac = (scaled % ten_thousand).to_string();
    let sign = if negative && !wei.is_zero() { "-" } else { "" };
    Some(format!("{sign}{whole}.{frac:0>4}"))
}

/// Ether amount for a raw `value` field, or the raw string when it does not
/// convert.
pub fn format_value(value: &str) -> String {
    wei_to_ether(value).unwrap_or_else(|| value.to_string())
}

/// Render unix seconds as a date, or [`INVALID_DATE`].
pub fn format_timestamp(ts: Option<i64>, zone: TimeDisplay) -> String {
    let Some(ts) = ts.filter(|ts| *ts >= 0) else {
        return INVALID_DATE.to_string();
    };
    let Some(utc) = DateTime::<Utc>::from_timestamp(ts, 0) else {
        return INVALID_DATE.to_string();
    };
    match zone {
        TimeDisplay::Utc => utc.format(DATE_FORMAT).to_string(),
        TimeDisplay::Local => utc.with_timezone(&Local).format(DATE_FORMAT).to_string(),
    }
}

/// 0-1 fraction as a percentage with one decimal (`0.8` -> `80.0%`)
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => NA.to_string(),
    }
}

/// 0-1 fraction as a whole percentage (`0.7` -> `70%`)
pub fn format_percent_rounded(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// 0-10 rating with one decimal (`7.5` -> `7.5/10`)
pub fn format_rating(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}/10"),
        None => NA.to_string(),
    }
}

/// `0x1234...abcd` for anything longer than ten characters
pub fn truncate_address(address: &str) -> String {
    let count = address.chars().count();
    if count <= 10 {
        return address.to_string();
    }
    let head: String = address.chars().take(6).collect();
    let tail: String = address.chars().skip(count - 4).collect();
    format!("{head}...{tail}")
}

/// Text of an optional field, or [`NA`]
pub fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(NA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wei_to_ether_exact() {
        assert_eq!(wei_to_ether("1000000000000000000").as_deref(), Some("1.0000"));
        assert_eq!(wei_to_ether("1500000000000000000").as_deref(), Some("1.5000"));
        assert_eq!(wei_to_ether("0").as_deref(), Some("0.0000"));
        assert_eq!(wei_to_ether("123456789000000000000").as_deref(), Some("123.4568"));
        assert_eq!(wei_to_ether("49999999999999").as_deref(), Some("0.0000"));
        assert_eq!(wei_to_ether("50000000000000").as_deref(), Some("0.0001"));
    }

    #[test]
    fn test_wei_to_ether_huge_value() {
        let max = U256::MAX.to_string();
        assert_eq!(
            wei_to_ether(&max).as_deref(),
            Some("115792089237316195423570985008687907853269984665640564039457.5840")
        );
    }

    #[test]
    fn test_format_value_falls_back_to_raw() {
        assert_eq!(format_value("abc"), "abc");
        assert_eq!(format_value("--5"), "--5");
        assert_eq!(format_value("-"), "-");
        assert_eq!(format_value("1.5"), "1.5");
        assert_eq!(format_value(""), "");
        assert_eq!(format_value("0x10"), "0x10");
    }

    #[test]
    fn test_negative_wei_keeps_sign() {
        assert_eq!(format_value("-5"), "-0.0000");
        assert_eq!(format_value("-1500000000000000000"), "-1.5000");
        assert_eq!(format_value("-0"), "0.0000");
    }

    #[test]
    fn test_wei_overflow_is_raw() {
        let too_big = "9".repeat(100);
        assert_eq!(format_value(&too_big), too_big);
    }

    #[test]
    fn test_format_timestamp_utc() {
        assert_eq!(
            format_timestamp(Some(1_704_067_200), TimeDisplay::Utc),
            "2024/01/01 00:00:00"
        );
        assert_eq!(format_timestamp(Some(0), TimeDisplay::Utc), "1970/01/01 00:00:00");
    }

    #[test]
    fn test_format_timestamp_invalid() {
        assert_eq!(format_timestamp(Some(-1), TimeDisplay::Utc), INVALID_DATE);
        assert_eq!(format_timestamp(None, TimeDisplay::Local), INVALID_DATE);
        assert_eq!(format_timestamp(Some(i64::MAX), TimeDisplay::Utc), INVALID_DATE);
    }

    #[test]
    fn test_percent_and_rating() {
        assert_eq!(format_percent(Some(0.8)), "80.0%");
        assert_eq!(format_percent(Some(0.0)), "0.0%");
        assert_eq!(format_percent(Some(0.856)), "85.6%");
        assert_eq!(format_percent(None), NA);
        assert_eq!(format_rating(Some(7.5)), "7.5/10");
        assert_eq!(format_rating(Some(8.0)), "8.0/10");
        assert_eq!(format_rating(None), NA);
        assert_eq!(format_percent_rounded(0.7), "70%");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234...5678"
        );
        assert_eq!(truncate_address("0x12345678"), "0x12345678");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(Some("swap")), "swap");
        assert_eq!(or_na(Some("")), NA);
        assert_eq!(or_na(None), NA);
    }
}
