//! Per-field request validation helpers.
//!
//! Request DTOs keep enum-valued fields as plain strings so that a bad value
//! becomes a field-level validation error rather than an opaque
//! deserialization rejection. Validation always runs before any mutation is
//! attempted.

use std::str::FromStr;

use crate::error::FieldError;

/// A non-empty (after trimming) string field. Pushes a [`FieldError`] and
/// returns `None` when missing or blank.
pub fn required_text(
  errors: &mut Vec<FieldError>,
  field: &'static str,
  value: Option<&str>,
) -> Option<String> {
  match value.map(str::trim) {
    Some(s) if !s.is_empty() => Some(s.to_owned()),
    _ => {
      errors.push(FieldError::new(field, "must be a non-empty string"));
      None
    }
  }
}

/// A required member of a fixed option set.
pub fn required_member<T>(
  errors: &mut Vec<FieldError>,
  field: &'static str,
  value: Option<&str>,
) -> Option<T>
where
  T: FromStr<Err = feedback_core::Error>,
{
  let Some(raw) = value else {
    errors.push(FieldError::new(field, "is required"));
    return None;
  };
  parse_member(errors, field, raw)
}

/// An optional member of a fixed option set: absent input stays `None`, a
/// present-but-invalid value is a field error.
pub fn optional_member<T>(
  errors: &mut Vec<FieldError>,
  field: &'static str,
  value: Option<&str>,
) -> Option<T>
where
  T: FromStr<Err = feedback_core::Error>,
{
  value.and_then(|raw| parse_member(errors, field, raw))
}

fn parse_member<T>(
  errors: &mut Vec<FieldError>,
  field: &'static str,
  raw: &str,
) -> Option<T>
where
  T: FromStr<Err = feedback_core::Error>,
{
  match raw.parse() {
    Ok(value) => Some(value),
    Err(e) => {
      errors.push(FieldError::new(field, e.to_string()));
      None
    }
  }
}
