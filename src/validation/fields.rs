//! Reusable field rules shared by the card and set validators.
//!
//! Every rule takes the field name and the raw value as found in the request
//! (`None` when the key is absent or `null`) and returns the narrowed value.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use url::{Host, Url};

use super::error::{ValidationError, ViolationKind};
use super::tokens::COLORS;

pub type FieldResult<T> = std::result::Result<T, ValidationError>;

// ---------------------------------------------------------------------------
// RawRecord
// ---------------------------------------------------------------------------

/// Loosely-typed view over an incoming JSON object.
///
/// Nothing about the values is trusted; lookups return whatever the caller
/// sent, with `null` folded into "absent".
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RawRecord<'a> {
    /// Borrow `value` as a record, failing if it is not a JSON object.
    pub fn from_value(field: &str, value: &'a Value) -> FieldResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(structural(field, "an object", other)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.fields.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Error helpers
// ---------------------------------------------------------------------------

pub(crate) fn type_mismatch(field: &str, expected: &'static str, value: &Value) -> ValidationError {
    ValidationError::new(field, ViolationKind::TypeMismatch { expected }).with_value(value)
}

pub(crate) fn format_violation(
    field: &str,
    expected: &'static str,
    value: &Value,
) -> ValidationError {
    ValidationError::new(field, ViolationKind::FormatViolation { expected }).with_value(value)
}

pub(crate) fn structural(field: &str, expected: &'static str, value: &Value) -> ValidationError {
    ValidationError::new(field, ViolationKind::StructuralViolation { expected }).with_value(value)
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// Required string; the empty string is allowed.
pub fn required_str<'a>(field: &str, value: Option<&'a Value>) -> FieldResult<&'a str> {
    match value {
        None => Err(ValidationError::missing(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(type_mismatch(field, "a string", other)),
    }
}

pub fn required_non_empty(field: &str, value: Option<&Value>) -> FieldResult<String> {
    let s = required_str(field, value)?;
    if s.is_empty() {
        return Err(ValidationError::empty(field));
    }
    Ok(s.to_string())
}

/// Absent is fine; present must be a non-empty string.
pub fn optional_non_empty(field: &str, value: Option<&Value>) -> FieldResult<Option<String>> {
    value.map(|_| required_non_empty(field, value)).transpose()
}

pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn required_alphanumeric(field: &str, value: Option<&Value>) -> FieldResult<String> {
    let s = required_non_empty(field, value)?;
    if !is_alphanumeric(&s) {
        return Err(format_violation(field, "alphanumeric", &Value::String(s)));
    }
    Ok(s)
}

pub fn optional_alphanumeric(field: &str, value: Option<&Value>) -> FieldResult<Option<String>> {
    value.map(|_| required_alphanumeric(field, value)).transpose()
}

/// `+3`, `-2`, `0`: an optional sign followed by digits.
pub fn optional_signed_integer(field: &str, value: Option<&Value>) -> FieldResult<Option<String>> {
    let Some(s) = optional_non_empty(field, value)? else {
        return Ok(None);
    };
    let digits = s.strip_prefix(['+', '-']).unwrap_or(&s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format_violation(
            field,
            "a signed whole number such as +2 or -1",
            &Value::String(s),
        ));
    }
    Ok(Some(s))
}

// ---------------------------------------------------------------------------
// Token tables
// ---------------------------------------------------------------------------

pub fn required_token(
    field: &str,
    value: Option<&Value>,
    table: &HashSet<&'static str>,
) -> FieldResult<String> {
    let s = required_non_empty(field, value)?;
    if !table.contains(s.as_str()) {
        return Err(
            ValidationError::new(field, ViolationKind::DomainViolation).with_value(&Value::String(s))
        );
    }
    Ok(s)
}

pub fn optional_token(
    field: &str,
    value: Option<&Value>,
    table: &HashSet<&'static str>,
) -> FieldResult<Option<String>> {
    value.map(|_| required_token(field, value, table)).transpose()
}

// ---------------------------------------------------------------------------
// Booleans and numbers
// ---------------------------------------------------------------------------

pub fn required_bool(field: &str, value: Option<&Value>) -> FieldResult<bool> {
    match value {
        None => Err(ValidationError::missing(field)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(type_mismatch(field, "a boolean", other)),
    }
}

pub fn optional_bool(field: &str, value: Option<&Value>) -> FieldResult<Option<bool>> {
    value.map(|_| required_bool(field, value)).transpose()
}

/// Finite, non-negative number.
pub fn required_non_negative(field: &str, value: Option<&Value>) -> FieldResult<f64> {
    let raw = value.ok_or_else(|| ValidationError::missing(field))?;
    let n = raw
        .as_f64()
        .ok_or_else(|| type_mismatch(field, "a number", raw))?;
    if !n.is_finite() || n < 0.0 {
        return Err(format_violation(field, "a non-negative number", raw));
    }
    Ok(n)
}

pub fn optional_non_negative(field: &str, value: Option<&Value>) -> FieldResult<Option<f64>> {
    value.map(|_| required_non_negative(field, value)).transpose()
}

pub fn required_count(field: &str, value: Option<&Value>) -> FieldResult<u64> {
    let raw = value.ok_or_else(|| ValidationError::missing(field))?;
    if !raw.is_number() {
        return Err(type_mismatch(field, "a number", raw));
    }
    raw.as_u64()
        .ok_or_else(|| format_violation(field, "a whole number of at least 0", raw))
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Strict `YYYY-MM-DD`: exactly ten characters, dashes in place, real date.
pub fn required_date(field: &str, value: Option<&Value>) -> FieldResult<String> {
    let s = required_non_empty(field, value)?;
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped || NaiveDate::parse_from_str(&s, "%Y-%m-%d").is_err() {
        return Err(format_violation(field, "a date in YYYY-MM-DD form", &Value::String(s)));
    }
    Ok(s)
}

// ---------------------------------------------------------------------------
// URIs
// ---------------------------------------------------------------------------

/// Absolute http(s) URI with a dotted domain name or an IP address host.
pub fn is_web_uri(s: &str) -> bool {
    let Ok(url) = Url::parse(s) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => {
            let labels: Vec<&str> = domain.split('.').collect();
            labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Whether the URI's path (query and fragment ignored) ends in `extension`.
pub fn has_extension(s: &str, extension: &str) -> bool {
    Url::parse(s)
        .map(|url| url.path().to_ascii_lowercase().ends_with(extension))
        .unwrap_or(false)
}

pub fn required_uri(field: &str, value: Option<&Value>) -> FieldResult<String> {
    let s = required_non_empty(field, value)?;
    if !is_web_uri(&s) {
        return Err(format_violation(field, "a valid absolute URI", &Value::String(s)));
    }
    Ok(s)
}

pub fn optional_uri(field: &str, value: Option<&Value>) -> FieldResult<Option<String>> {
    value.map(|_| required_uri(field, value)).transpose()
}

/// Required web URI whose path ends in `extension` (e.g. `.png`).
pub fn required_file_uri(
    field: &str,
    value: Option<&Value>,
    extension: &'static str,
    expected: &'static str,
) -> FieldResult<String> {
    let s = required_non_empty(field, value)?;
    if !is_web_uri(&s) || !has_extension(&s, extension) {
        return Err(format_violation(field, expected, &Value::String(s)));
    }
    Ok(s)
}

pub fn optional_file_uri(
    field: &str,
    value: Option<&Value>,
    extension: &'static str,
    expected: &'static str,
) -> FieldResult<Option<String>> {
    value
        .map(|_| required_file_uri(field, value, extension, expected))
        .transpose()
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// An array of color tokens holding each color at most once.
///
/// `allow_empty` controls whether `[]` is accepted.
pub fn color_array(field: &str, value: &Value, allow_empty: bool) -> FieldResult<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| structural(field, "an array of colors", value))?;
    if items.is_empty() && !allow_empty {
        return Err(ValidationError::new(field, ViolationKind::EmptyValue).with_value(value));
    }

    let mut seen: Vec<String> = Vec::with_capacity(COLORS.len());
    for item in items {
        let color = item
            .as_str()
            .ok_or_else(|| type_mismatch(field, "an array of strings", item))?;
        if !COLORS.contains(color) {
            return Err(ValidationError::new(field, ViolationKind::DomainViolation).with_value(item));
        }
        if seen.iter().any(|c| c == color) {
            return Err(
                ValidationError::new(field, ViolationKind::UniquenessViolation).with_value(item)
            );
        }
        seen.push(color.to_string());
    }
    Ok(seen)
}

pub fn required_colors(field: &str, value: Option<&Value>) -> FieldResult<Vec<String>> {
    let raw = value.ok_or_else(|| ValidationError::missing(field))?;
    color_array(field, raw, true)
}

pub fn optional_colors(
    field: &str,
    value: Option<&Value>,
    allow_empty: bool,
) -> FieldResult<Option<Vec<String>>> {
    value.map(|raw| color_array(field, raw, allow_empty)).transpose()
}
