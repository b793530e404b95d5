//! Tolerant field decoders for loosely-typed backend payloads
//!
//! The analysis workflow and the per-transaction parser both emit JSON
//! produced by a language model, so a field may arrive as a number, a
//! numeric string, `null`, or something else entirely. Each helper maps
//! "unusable" to `None` (or an empty list) instead of failing the whole
//! record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Number or numeric string -> f64
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Integer or integer string -> i64
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64))
}

/// String, number or bool -> non-empty String
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_string))
}

/// Array of scalars -> Vec<String>; anything else -> empty
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(value_as_string).collect(),
        _ => Vec::new(),
    })
}

/// Strings are kept verbatim; anything else (including null) becomes empty.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Like [`opt_string`] but for nested objects that may be malformed.
pub fn opt_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Array of records where each element decodes on its own. Elements that
/// do not decode are skipped; a non-array is an empty list.
pub fn record_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let Some(Value::Array(items)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(index, %err, "skipping malformed record");
                None
            }
        })
        .collect())
}

/// Leading decimal number of a string, ignoring whatever follows it
/// (`"15.5 ETH"` -> `15.5`). `None` when the text does not start with one.
pub fn leading_f64(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn value_as_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_f64")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "opt_i64")]
        time: Option<i64>,
        #[serde(default, deserialize_with = "opt_string")]
        label: Option<String>,
        #[serde(default, deserialize_with = "string_list")]
        items: Vec<String>,
    }

    fn decode(json: &str) -> Sample {
        serde_json::from_str(json).expect("sample json")
    }

    #[test]
    fn test_numbers_accept_strings() {
        let p = decode(r#"{"score": "0.75", "time": "1704067200"}"#);
        assert_eq!(p.score, Some(0.75));
        assert_eq!(p.time, Some(1_704_067_200));
    }

    #[test]
    fn test_wrong_types_become_absent() {
        let p = decode(r#"{"score": "high", "time": [1], "label": {"a": 1}, "items": "x"}"#);
        assert_eq!(p.score, None);
        assert_eq!(p.time, None);
        assert_eq!(p.label, None);
        assert!(p.items.is_empty());
    }

    #[test]
    fn test_empty_and_null_strings_are_absent() {
        let p = decode(r#"{"label": "  ", "items": ["a", null, "", 3]}"#);
        assert_eq!(p.label, None);
        assert_eq!(p.items, vec!["a".to_string(), "3".to_string()]);
        let p = decode(r#"{"label": null}"#);
        assert_eq!(p.label, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let p = decode("{}");
        assert!(p.score.is_none() && p.time.is_none() && p.label.is_none());
        assert!(p.items.is_empty());
    }

    #[test]
    fn test_leading_number_ignores_suffix() {
        assert_eq!(leading_f64("15.5 ETH"), Some(15.5));
        assert_eq!(leading_f64("  1.55ETH"), Some(1.55));
        assert_eq!(leading_f64("-2e3 units"), Some(-2000.0));
        assert_eq!(leading_f64("3e"), Some(3.0));
        assert_eq!(leading_f64(".5"), Some(0.5));
        assert_eq!(leading_f64("42"), Some(42.0));
    }

    #[test]
    fn test_leading_number_absent() {
        assert_eq!(leading_f64("ETH 15"), None);
        assert_eq!(leading_f64("."), None);
        assert_eq!(leading_f64("-"), None);
        assert_eq!(leading_f64(""), None);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    #[derive(Debug, Deserialize)]
    struct Rows {
        #[serde(default, deserialize_with = "record_list")]
        rows: Vec<Row>,
    }

    #[test]
    fn test_record_list_skips_bad_elements() {
        let rows: Rows =
            serde_json::from_str(r#"{"rows":[{"id":1},{"id":"x"},7,null,{"id":2}]}"#).unwrap();
        assert_eq!(rows.rows, vec![Row { id: 1 }, Row { id: 2 }]);

        let rows: Rows = serde_json::from_str(r#"{"rows":null}"#).unwrap();
        assert!(rows.rows.is_empty());
    }
}
