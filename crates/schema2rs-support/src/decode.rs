//! Conversions from decoded JSON into the in-memory representation of generated types.
//!
//! Every helper returns a [`ValidationError`] instead of panicking so that generated code can
//! decode unvalidated input (`build_from_input(value, false)`) without trusting its shape.

use std::{
  collections::HashMap,
  sync::{LazyLock, Mutex},
};

use regex::Regex;
use serde_json::{Map, Value};

use crate::{DateTime, Number, ValidationError};

static PATTERN_CACHE: LazyLock<Mutex<HashMap<String, Option<Regex>>>> = LazyLock::new(|| Mutex::new(HashMap::new()));

pub fn object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
  value
    .as_object()
    .ok_or_else(|| ValidationError::unexpected_type("object", value))
}

pub fn array(value: &Value) -> Result<&Vec<Value>, ValidationError> {
  value
    .as_array()
    .ok_or_else(|| ValidationError::unexpected_type("array", value))
}

pub fn required<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value, ValidationError> {
  object.get(key).ok_or_else(|| ValidationError::missing_property(key))
}

pub fn string(value: &Value) -> Result<String, ValidationError> {
  value
    .as_str()
    .map(str::to_owned)
    .ok_or_else(|| ValidationError::unexpected_type("string", value))
}

pub fn boolean(value: &Value) -> Result<bool, ValidationError> {
  value
    .as_bool()
    .ok_or_else(|| ValidationError::unexpected_type("boolean", value))
}

/// Integers also accept floats without a fractional part (`1.0`), which some encoders emit.
#[allow(clippy::cast_possible_truncation)]
pub fn integer(value: &Value) -> Result<i64, ValidationError> {
  if let Some(integer) = value.as_i64() {
    return Ok(integer);
  }
  match value.as_f64() {
    Some(float) if float.fract() == 0.0 && float.abs() < 9.0e15 => Ok(float as i64),
    _ => Err(ValidationError::unexpected_type("integer", value)),
  }
}

pub fn number(value: &Value) -> Result<Number, ValidationError> {
  Number::from_json(value)
}

pub fn date_time(value: &Value) -> Result<DateTime, ValidationError> {
  let text = value
    .as_str()
    .ok_or_else(|| ValidationError::unexpected_type("date-time string", value))?;
  chrono::DateTime::parse_from_rfc3339(text)
    .map(|parsed| parsed.with_timezone(&chrono::Utc))
    .map_err(|err| ValidationError::new(format!("'{text}' is not a valid date-time: {err}")))
}

pub fn is_integer(value: &Value) -> bool {
  integer(value).is_ok()
}

pub fn is_date_time(value: &Value) -> bool {
  date_time(value).is_ok()
}

/// Tests a `patternProperties` key. Invalid patterns never match.
pub fn matches_pattern(pattern: &str, key: &str) -> bool {
  let mut cache = PATTERN_CACHE.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
  cache
    .entry(pattern.to_owned())
    .or_insert_with(|| Regex::new(pattern).ok())
    .as_ref()
    .is_some_and(|regex| regex.is_match(key))
}
