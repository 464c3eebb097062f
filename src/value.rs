// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// Format used to display date-time values. It is also one of the formats
/// accepted when parsing so a displayed value can always be read back.
const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Formats for values that specify a date and a time.
const DATETIME_FORMATS: &[&str] = &[
    DATETIME_DISPLAY_FORMAT,
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%B %d %Y %H:%M:%S",
    "%B %d %Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
];

/// Formats for values that only specify a date (the time is midnight).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%B %d %Y", "%B %d, %Y"];

/// Zone names that are accepted (and ignored) at the end of a date-time.
const ZONE_NAMES: &[&str] = &["UTC", "GMT"];

const TRUE_VALUES: &[&str] = &["true", "yes", "on", "1"];
const FALSE_VALUES: &[&str] = &["false", "no", "off", "0"];

/// The type of value an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// Free text (any value is valid).
    Text,
    /// Signed 64-bit integer.
    Integer,
    /// Floating-point number.
    Number,
    /// Boolean, specified as one of `true`, `yes`, `on`, `1`, `false`,
    /// `no`, `off` or `0` (case insensitive).
    Boolean,
    /// Date with optional time, for example `2021-03-04`,
    /// `2021-03-04T10:30:00Z` or `4 March 2021 10:30`.
    DateTime,
    /// A type the parser cannot convert to. No value will ever be
    /// accepted for an option of this type.
    Other,
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::Text
    }
}

impl ValueType {
    /// Returns true if values of this type are free text and so should be
    /// quoted when shown.
    pub fn is_quoted(self) -> bool {
        matches!(self, ValueType::Text | ValueType::DateTime | ValueType::Other)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueType::Text => "text",
            ValueType::Integer => "integer",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::DateTime => "datetime",
            ValueType::Other => "other",
        };

        write!(f, "{}", name)
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A [ValueType::Text] value.
    Text(String),
    /// A [ValueType::Integer] value.
    Integer(i64),
    /// A [ValueType::Number] value.
    Number(f64),
    /// A [ValueType::Boolean] value.
    Boolean(bool),
    /// A [ValueType::DateTime] value.
    DateTime(NaiveDateTime),
}

impl Value {
    /// The type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Text(_) => ValueType::Text,
            Value::Integer(_) => ValueType::Integer,
            Value::Number(_) => ValueType::Number,
            Value::Boolean(_) => ValueType::Boolean,
            Value::DateTime(_) => ValueType::DateTime,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_DISPLAY_FORMAT)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

/// Rust types that an option value can be retrieved as.
///
/// Each implementing type corresponds to exactly one [ValueType]. Asking
/// for an option using a type that does not match its declaration is an
/// error rather than a conversion.
pub trait FromValue: Sized + Default {
    /// The declared type this Rust type corresponds to.
    const VALUE_TYPE: ValueType;

    /// Extract the Rust value, or [None] if the value has another type.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    const VALUE_TYPE: ValueType = ValueType::Text;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    const VALUE_TYPE: ValueType = ValueType::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::Number;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for NaiveDateTime {
    const VALUE_TYPE: ValueType = ValueType::DateTime;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// Convert the raw command-line text into a value of the specified type.
///
/// Returns [None] if the text is not a valid value for the type. Values
/// of type [ValueType::Other] are always rejected.
pub fn coerce(value_type: ValueType, raw: &str) -> Option<Value> {
    match value_type {
        ValueType::Text => Some(Value::Text(raw.into())),
        ValueType::Integer => raw.trim().parse::<i64>().ok().map(Value::Integer),
        ValueType::Number => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Value::Number),
        ValueType::Boolean => parse_bool(raw).map(Value::Boolean),
        ValueType::DateTime => parse_datetime(raw).map(Value::DateTime),
        ValueType::Other => None,
    }
}

/// Convert an existing value (such as a declared default) to the
/// specified type.
///
/// Text is parsed as though it came from the command-line and integers
/// widen to numbers. Any other type change fails.
pub(crate) fn coerce_value(value_type: ValueType, value: &Value) -> Option<Value> {
    match (value_type, value) {
        (ValueType::Other, _) => None,
        (t, v) if v.value_type() == t => Some(v.clone()),
        (ValueType::Number, Value::Integer(i)) => Some(Value::Number(*i as f64)),
        (t, Value::Text(s)) => coerce(t, s),
        _ => None,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();

    if TRUE_VALUES.iter().any(|v| v.eq_ignore_ascii_case(raw)) {
        Some(true)
    } else if FALSE_VALUES.iter().any(|v| v.eq_ignore_ascii_case(raw)) {
        Some(false)
    } else {
        None
    }
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let s = strip_zone(raw.trim());

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Remove any trailing zone indicator (`Z`, `UTC`, `GMT`, `+hh:mm`,
/// `-hhmm`). The zone is not applied: the date and time are used as
/// written.
fn strip_zone(s: &str) -> &str {
    for zone in ZONE_NAMES {
        if let Some(split) = s.len().checked_sub(zone.len()) {
            if let (Some(head), Some(tail)) = (s.get(..split), s.get(split..)) {
                if tail.eq_ignore_ascii_case(zone) && head.ends_with(' ') {
                    return head.trim_end();
                }
            }
        }
    }

    let bytes = s.as_bytes();
    let len = bytes.len();

    if len > 1 && matches!(bytes[len - 1], b'Z' | b'z') && bytes[len - 2].is_ascii_digit() {
        return &s[..len - 1];
    }

    // A numeric offset is only looked for when a time is present, since
    // the tail of a date such as "2021-03-04" looks like "-hhmm".
    let is_sign = |b: u8| b == b'+' || b == b'-';
    let all_digits = |r: &[u8]| r.iter().all(u8::is_ascii_digit);

    let offset_start = if len > 6
        && is_sign(bytes[len - 6])
        && all_digits(&bytes[len - 5..len - 3])
        && bytes[len - 3] == b':'
        && all_digits(&bytes[len - 2..])
    {
        Some(len - 6)
    } else if len > 5 && is_sign(bytes[len - 5]) && all_digits(&bytes[len - 4..]) {
        Some(len - 5)
    } else {
        None
    };

    match offset_start {
        Some(start) if s[..start].contains(':') => s[..start].trim_end(),
        _ => s,
    }
}
