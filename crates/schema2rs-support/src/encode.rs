//! Conversions from the in-memory representation back to JSON.

use chrono::SecondsFormat;
use serde_json::Value;

use crate::DateTime;

pub fn date_time(value: &DateTime) -> Value {
  Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

pub fn list<T>(items: &[T], encode: impl Fn(&T) -> Value) -> Value {
  Value::Array(items.iter().map(encode).collect())
}

pub fn map<T>(entries: &crate::Map<T>, encode: impl Fn(&T) -> Value) -> Value {
  Value::Object(entries.iter().map(|(key, value)| (key.clone(), encode(value))).collect())
}
