//! ValueType - recognition and conversion of raw argument tokens.
//!
//! Each variant judges a token in isolation. A token such as `"1"` satisfies
//! Number, String, Boolean and Date at once; which one applies is decided by
//! the argument schema, never by the token's content.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::TypedValue;
use crate::domain::foundation::ConversionError;

const TRUTHY: [&str; 4] = ["true", "1", "y", "yes"];
const FALSY: [&str; 4] = ["false", "0", "n", "no"];

/// Free-form layouts carrying a time of day, interpreted as UTC.
///
/// Layouts never include a weekday; a leading one is stripped before matching.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%B %d %Y %H:%M:%S",
];

/// Free-form date-only layouts, resolved to midnight UTC.
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// The category a raw argument token is recognised and converted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Decimal or `0x`-prefixed hexadecimal integer.
    Number,
    /// Any token, unchanged.
    String,
    /// One of `true, 1, y, yes` or `false, 0, n, no`, case-insensitive.
    Boolean,
    /// A JSON object (not an array or scalar).
    Object,
    /// Epoch milliseconds, RFC 2822/1123, RFC 3339, or a common free-form date.
    Date,
}

impl ValueType {
    /// All value types.
    pub const ALL: [ValueType; 5] = [
        ValueType::Number,
        ValueType::String,
        ValueType::Boolean,
        ValueType::Object,
        ValueType::Date,
    ];

    /// Returns the lowercase type name.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Object => "object",
            ValueType::Date => "date",
        }
    }

    /// Returns true if `raw` is acceptable input for this type.
    pub fn is(&self, raw: &str) -> bool {
        match self {
            ValueType::Number => parse_integer(raw).is_some(),
            ValueType::String => true,
            ValueType::Boolean => parse_boolean(raw).is_some(),
            ValueType::Object => parse_object(raw).is_ok(),
            ValueType::Date => parse_date(raw).is_some(),
        }
    }

    /// Converts `raw` into a typed value.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` exactly when [`ValueType::is`] is false for `raw`.
    pub fn convert_value(&self, raw: &str) -> Result<TypedValue, ConversionError> {
        let converted = match self {
            ValueType::Number => parse_integer(raw).map(TypedValue::Number).ok_or_else(|| {
                self.reject(raw, "expected a decimal or 0x-prefixed hexadecimal integer")
            }),
            ValueType::String => Ok(TypedValue::String(raw.to_string())),
            ValueType::Boolean => parse_boolean(raw).map(TypedValue::Boolean).ok_or_else(|| {
                self.reject(raw, "expected one of true, 1, y, yes, false, 0, n, no")
            }),
            ValueType::Object => parse_object(raw)
                .map(TypedValue::Object)
                .map_err(|reason| self.reject(raw, reason)),
            ValueType::Date => parse_date(raw)
                .map(TypedValue::Date)
                .ok_or_else(|| self.reject(raw, "unrecognised date format")),
        };

        match &converted {
            Ok(value) => tracing::trace!(value_type = %self, %value, "converted token"),
            Err(e) => tracing::trace!(value_type = %self, error = %e, "rejected token"),
        }
        converted
    }

    fn reject(&self, raw: &str, reason: impl Into<String>) -> ConversionError {
        ConversionError::new(self.name(), raw, reason)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    if let Some(digits) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        // from_str_radix would otherwise accept a sign after the prefix
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return i64::from_str_radix(digits, 16).ok();
    }
    raw.parse().ok()
}

fn parse_boolean(raw: &str) -> Option<bool> {
    if TRUTHY.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| raw.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

fn parse_object(raw: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Array(_)) => Err("JSON array is not an object".to_string()),
        Ok(_) => Err("JSON scalar is not an object".to_string()),
        Err(e) => Err(format!("invalid JSON: {}", e)),
    }
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i64 = raw.parse().ok()?;
        return Utc.timestamp_millis_opt(millis).single();
    }

    // The weekday is redundant with the date and is not checked against it.
    let body = strip_weekday(raw);
    if let Ok(dt) = DateTime::parse_from_rfc2822(body) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(body, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(body, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Drops a leading weekday name (`Tue`, `tuesday,`) and the separator after it.
fn strip_weekday(raw: &str) -> &str {
    let Some((head, rest)) = raw.split_once(|c: char| c == ',' || c.is_whitespace()) else {
        return raw;
    };
    if head.parse::<Weekday>().is_ok() {
        rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace())
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    // Number

    #[test]
    fn number_is_true_for_decimal_and_hex() {
        let t = ValueType::Number;
        assert!(t.is("1"));
        assert!(t.is("0x12"));
        assert!(t.is("0XfF"));
        assert!(t.is("-42"));
    }

    #[test]
    fn number_is_false_for_trailing_garbage() {
        let t = ValueType::Number;
        assert!(!t.is("19a"));
        assert!(!t.is("abc"));
        assert!(!t.is("0x"));
        assert!(!t.is("0x1g"));
        assert!(!t.is("0x-12"));
        assert!(!t.is(""));
        assert!(!t.is("1.5"));
        assert!(!t.is(" 1"));
    }

    #[test]
    fn number_converts_to_integer() {
        let t = ValueType::Number;
        assert_eq!(t.convert_value("1").unwrap(), TypedValue::Number(1));
        assert_eq!(t.convert_value("1234").unwrap(), TypedValue::Number(1234));
        assert_eq!(t.convert_value("0x12").unwrap(), TypedValue::Number(18));
    }

    #[test]
    fn number_rejects_overflow() {
        assert!(!ValueType::Number.is("9223372036854775808"));
        assert!(ValueType::Number.is("9223372036854775807"));
    }

    #[test]
    fn number_convert_fails_with_conversion_error() {
        let err = ValueType::Number.convert_value("a").unwrap_err();
        assert_eq!(err.expected(), "number");
        assert_eq!(err.raw(), "a");
    }

    // String

    #[test]
    fn string_accepts_anything() {
        let t = ValueType::String;
        assert!(t.is("discord is spying on you right now"));
        assert!(t.is("1"));
        assert!(t.is(""));
    }

    #[test]
    fn string_converts_to_identity() {
        assert_eq!(
            ValueType::String
                .convert_value("discord is spying on you right now")
                .unwrap(),
            TypedValue::String("discord is spying on you right now".to_string())
        );
    }

    // Boolean

    #[test]
    fn boolean_is_true_for_known_symbols() {
        let t = ValueType::Boolean;
        for raw in ["true", "1", "y", "yes", "false", "0", "n", "no"] {
            assert!(t.is(raw), "{raw} should be a boolean");
        }
        for raw in ["TRUE", "Yes", "N", "No"] {
            assert!(t.is(raw), "{raw} should be a boolean");
        }
    }

    #[test]
    fn boolean_is_false_for_anything_else() {
        let t = ValueType::Boolean;
        assert!(!t.is("yesfalse"));
        assert!(!t.is("10"));
        assert!(!t.is("anything else"));
        assert!(!t.is("2"));
        assert!(!t.is(""));
    }

    #[test]
    fn boolean_converts_truthy_and_falsy() {
        let t = ValueType::Boolean;
        for raw in ["true", "1", "y", "yes"] {
            assert_eq!(t.convert_value(raw).unwrap(), TypedValue::Boolean(true));
        }
        for raw in ["false", "0", "n", "no"] {
            assert_eq!(t.convert_value(raw).unwrap(), TypedValue::Boolean(false));
        }
        assert!(t.convert_value("maybe").is_err());
    }

    // Object

    #[test]
    fn object_is_true_only_for_json_objects() {
        let t = ValueType::Object;
        assert!(t.is("{}"));
        assert!(t.is(r#"{ "a": "1", "b": "2" }"#));

        assert!(!t.is("[1, 2, 3]"));
        assert!(!t.is("1"));
        assert!(!t.is("a string"));
        assert!(!t.is("null"));
    }

    #[test]
    fn object_converts_to_map() {
        let t = ValueType::Object;
        let value = t.convert_value(r#"{ "foo": true, "bar": 1 }"#).unwrap();
        assert_eq!(
            serde_json::Value::Object(value.as_object().unwrap().clone()),
            json!({"foo": true, "bar": 1})
        );
        assert_eq!(t.convert_value("{}").unwrap(), TypedValue::Object(Map::new()));
    }

    #[test]
    fn object_convert_rejects_arrays_scalars_and_garbage() {
        let t = ValueType::Object;
        assert!(t.convert_value("1").is_err());
        assert!(t.convert_value("[1,2,3]").is_err());
        let err = t.convert_value("a string").unwrap_err();
        assert!(err.reason().starts_with("invalid JSON"));
    }

    // Date

    #[test]
    fn date_is_true_for_supported_formats() {
        let t = ValueType::Date;
        assert!(t.is("Mon, 25 Mar 2019 14:46:45 GMT"));
        assert!(t.is("1553525305044"));
        assert!(t.is("Mon Mar 25 2019"));
        assert!(t.is("2019-03-25T14:46:45Z"));
        assert!(t.is("2019-03-25"));
    }

    #[test]
    fn date_converts_rfc1123() {
        let expected = Utc.with_ymd_and_hms(2019, 3, 25, 14, 46, 45).unwrap();
        assert_eq!(
            ValueType::Date
                .convert_value("Mon, 25 Mar 2019 14:46:45 GMT")
                .unwrap(),
            TypedValue::Date(expected)
        );
    }

    #[test]
    fn date_converts_epoch_millis() {
        let expected = Utc.timestamp_millis_opt(1553525305044).unwrap();
        assert_eq!(
            ValueType::Date.convert_value("1553525305044").unwrap(),
            TypedValue::Date(expected)
        );
    }

    #[test]
    fn date_converts_free_form_to_midnight_utc() {
        let expected = Utc.with_ymd_and_hms(2019, 3, 25, 0, 0, 0).unwrap();
        assert_eq!(
            ValueType::Date.convert_value("Mon Mar 25 2019").unwrap(),
            TypedValue::Date(expected)
        );
        assert_eq!(
            ValueType::Date.convert_value("March 25, 2019").unwrap(),
            TypedValue::Date(expected)
        );
    }

    #[test]
    fn date_ignores_mismatched_weekday() {
        // 2019-03-25 was a Monday
        let midnight = Utc.with_ymd_and_hms(2019, 3, 25, 0, 0, 0).unwrap();
        assert_eq!(
            ValueType::Date.convert_value("Tue Mar 25 2019").unwrap(),
            TypedValue::Date(midnight)
        );
        assert_eq!(
            ValueType::Date.convert_value("friday, March 25, 2019").unwrap(),
            TypedValue::Date(midnight)
        );

        let afternoon = Utc.with_ymd_and_hms(2019, 3, 25, 14, 46, 45).unwrap();
        assert_eq!(
            ValueType::Date
                .convert_value("Sun, 25 Mar 2019 14:46:45 GMT")
                .unwrap(),
            TypedValue::Date(afternoon)
        );
    }

    #[test]
    fn weekday_alone_is_not_a_date() {
        assert!(!ValueType::Date.is("Tuesday"));
        assert!(!ValueType::Date.is("Tue, "));
    }

    #[test]
    fn date_rejects_garbage() {
        let err = ValueType::Date.convert_value("a string").unwrap_err();
        assert_eq!(err.expected(), "date");
        assert!(!ValueType::Date.is(""));
        assert!(!ValueType::Date.is("-"));
    }

    // Shared behaviour

    #[test]
    fn overlapping_token_is_judged_per_type() {
        assert_eq!(ValueType::Number.convert_value("1").unwrap(), TypedValue::Number(1));
        assert_eq!(ValueType::Boolean.convert_value("1").unwrap(), TypedValue::Boolean(true));
        assert_eq!(
            ValueType::String.convert_value("1").unwrap(),
            TypedValue::String("1".to_string())
        );
    }

    #[test]
    fn is_is_idempotent() {
        for t in ValueType::ALL {
            for raw in ["1", "0x12", "yes", "{}", "1553525305044", "19a"] {
                let first = t.is(raw);
                assert_eq!(t.is(raw), first);
                assert_eq!(t.is(raw), first);
            }
        }
    }

    #[test]
    fn converted_value_reports_its_type() {
        for (t, raw) in [
            (ValueType::Number, "7"),
            (ValueType::String, "x"),
            (ValueType::Boolean, "no"),
            (ValueType::Object, "{}"),
            (ValueType::Date, "0"),
        ] {
            assert_eq!(t.convert_value(raw).unwrap().value_type(), t);
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&ValueType::Boolean).unwrap(), "\"boolean\"");
    }

    proptest! {
        #[test]
        fn is_agrees_with_convert_value(raw in ".*") {
            for t in ValueType::ALL {
                prop_assert_eq!(t.is(&raw), t.convert_value(&raw).is_ok());
            }
        }

        #[test]
        fn is_is_stable_for_arbitrary_input(raw in ".*") {
            for t in ValueType::ALL {
                prop_assert_eq!(t.is(&raw), t.is(&raw));
            }
        }

        #[test]
        fn decimal_integers_convert_to_themselves(n in any::<i64>()) {
            prop_assert_eq!(
                ValueType::Number.convert_value(&n.to_string()).unwrap(),
                TypedValue::Number(n)
            );
        }

        #[test]
        fn hex_integers_convert_to_their_value(n in 0i64..=i64::MAX) {
            prop_assert_eq!(
                ValueType::Number.convert_value(&format!("0x{:x}", n)).unwrap(),
                TypedValue::Number(n)
            );
        }
    }
}
