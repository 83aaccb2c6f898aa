//! In-place numeric coercion of record fields

use crate::errors::{StatsError, StatsResult};
use crate::record::Observation;
use crate::types::FieldValue;

/// Force `field` to be numeric on every record of `items`.
///
/// Values that are already numeric are left alone. Text containing a signed
/// decimal (`[-+]?[0-9]+\.[0-9]+`) becomes a float, anything else becomes an
/// integer. Samples that are empty or whose first item is not a record are
/// returned untouched. The same slice is handed back so calls can be chained.
///
/// # Arguments
/// * `items` - Records, mutated in place
/// * `field` - Field to coerce
///
/// # Returns
/// * The same `items`, for chaining
/// * `FieldAccess` if a later item is not a record
pub fn make_numeric<'a, T: Observation>(
    items: &'a mut [T],
    field: &str,
) -> StatsResult<&'a mut [T]> {
    if !items.first().is_some_and(|first| first.is_record()) {
        return Ok(items);
    }

    for (index, item) in items.iter_mut().enumerate() {
        let record = item
            .as_record_mut()
            .ok_or_else(|| StatsError::field_access(Some(field), index, "item is not a record"))?;
        let value = record.get_field(field);
        if value.is_numeric() {
            continue;
        }
        record.set_field(field, coerce(&value));
    }

    Ok(items)
}

/// Alias of [`make_numeric`]
pub fn coerce_numeric<'a, T: Observation>(
    items: &'a mut [T],
    field: &str,
) -> StatsResult<&'a mut [T]> {
    make_numeric(items, field)
}

pub(crate) fn coerce(value: &FieldValue) -> FieldValue {
    match value {
        FieldValue::Int(_) | FieldValue::Float(_) => value.clone(),
        FieldValue::Text(text) if contains_decimal(text) => FieldValue::Float(float_prefix(text)),
        FieldValue::Text(text) => int_prefix(text),
        FieldValue::Null | FieldValue::Bool(_) => FieldValue::Int(0),
    }
}

/// Unanchored search for `digits '.' digits`
fn contains_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.windows(3).any(|w| {
        w[0].is_ascii_digit() && w[1] == b'.' && w[2].is_ascii_digit()
    })
}

/// Length of the optional sign plus the run of digits at the start of `s`
fn signed_digits_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    sign + bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading float of `text`, or 0.0 when there is none
fn float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = signed_digits_len(s);
    let mut mantissa_digits = bytes[..end].iter().filter(|b| b.is_ascii_digit()).count();

    if bytes.get(end) == Some(&b'.') {
        let frac = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac > 0 {
            end += 1 + frac;
            mantissa_digits += frac;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp = signed_digits_len(&s[end + 1..]);
        let exp_has_digits = s[end + 1..end + 1 + exp]
            .bytes()
            .any(|b| b.is_ascii_digit());
        if exp_has_digits {
            end += 1 + exp;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Leading integer of `text`, or 0 when there is none
fn int_prefix(text: &str) -> FieldValue {
    let s = text.trim_start();
    let end = signed_digits_len(s);
    let digits = &s[..end];
    if !digits.bytes().any(|b| b.is_ascii_digit()) {
        return FieldValue::Int(0);
    }
    match digits.parse::<i64>() {
        Ok(i) => FieldValue::Int(i),
        // Out of i64 range
        Err(_) => FieldValue::Float(digits.parse().unwrap_or(0.0)),
    }
}
