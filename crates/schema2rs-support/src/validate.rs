use std::{
  collections::HashMap,
  sync::{Arc, LazyLock, Mutex, PoisonError},
};

use jsonschema::Validator;
use serde_json::Value;

use crate::ValidationError;

type ValidatorKey = (&'static str, Option<String>);

static VALIDATORS: LazyLock<Mutex<HashMap<ValidatorKey, Arc<Validator>>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

const DEFINITION_KEYWORDS: [&str; 2] = ["definitions", "$defs"];

/// Validates `instance` against the schema embedded in a generated type.
pub fn validate(schema: &'static str, instance: &Value) -> Result<(), ValidationError> {
  let validator = validator_for(schema, None)?;
  check(&validator, instance)
}

/// Validates a single property value against `properties[key]` of the embedded schema.
///
/// Definitions of the embedded schema are carried over so local `$ref`s keep resolving.
/// A key that is not declared in the schema accepts any value.
pub fn validate_property(schema: &'static str, key: &str, instance: &Value) -> Result<(), ValidationError> {
  let validator = validator_for(schema, Some(key))?;
  check(&validator, instance).map_err(|err| err.at(key))
}

fn check(validator: &Validator, instance: &Value) -> Result<(), ValidationError> {
  let messages: Vec<String> = validator.iter_errors(instance).map(|err| err.to_string()).collect();
  if messages.is_empty() {
    Ok(())
  } else {
    Err(ValidationError::from_messages(messages))
  }
}

fn validator_for(schema: &'static str, key: Option<&str>) -> Result<Arc<Validator>, ValidationError> {
  let cache_key = (schema, key.map(str::to_owned));
  let mut cache = VALIDATORS.lock().unwrap_or_else(PoisonError::into_inner);
  if let Some(validator) = cache.get(&cache_key) {
    return Ok(Arc::clone(validator));
  }

  let document: Value = serde_json::from_str(schema)
    .map_err(|err| ValidationError::new(format!("embedded schema is not valid JSON: {err}")))?;
  let target = match key {
    Some(key) => property_schema(&document, key),
    None => document,
  };

  let validator = jsonschema::validator_for(&target)
    .map_err(|err| ValidationError::new(format!("embedded schema cannot be compiled: {err}")))?;
  let validator = Arc::new(validator);
  cache.insert(cache_key, Arc::clone(&validator));
  Ok(validator)
}

fn property_schema(document: &Value, key: &str) -> Value {
  let Some(property) = document.get("properties").and_then(|p| p.get(key)) else {
    return Value::Bool(true);
  };

  let mut property = property.clone();
  if let Value::Object(target) = &mut property {
    for keyword in DEFINITION_KEYWORDS {
      if let Some(definitions) = document.get(keyword)
        && !target.contains_key(keyword)
      {
        target.insert(keyword.to_string(), definitions.clone());
      }
    }
  }
  property
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  const SCHEMA: &str = r##"{
    "type": "object",
    "required": ["name"],
    "properties": {
      "name": { "type": "string", "minLength": 2 },
      "limit": { "type": "integer", "maximum": 100 },
      "address": { "$ref": "#/definitions/address" }
    },
    "definitions": {
      "address": { "type": "object", "required": ["city"] }
    }
  }"##;

  #[test]
  fn test_validate_accepts_valid_instance() {
    assert!(validate(SCHEMA, &json!({"name": "ok", "limit": 5})).is_ok());
  }

  #[test]
  fn test_validate_collects_every_violation() {
    let err = validate(SCHEMA, &json!({"limit": 500})).unwrap_err();
    assert_eq!(err.messages().len(), 2);
  }

  #[test]
  fn test_validate_property() {
    assert!(validate_property(SCHEMA, "limit", &json!(10)).is_ok());
    let err = validate_property(SCHEMA, "limit", &json!(101)).unwrap_err();
    assert!(err.to_string().starts_with("limit: "));
  }

  #[test]
  fn test_validate_property_resolves_local_refs() {
    assert!(validate_property(SCHEMA, "address", &json!({"city": "Oslo"})).is_ok());
    assert!(validate_property(SCHEMA, "address", &json!({})).is_err());
  }

  #[test]
  fn test_undeclared_property_accepts_anything() {
    assert!(validate_property(SCHEMA, "unknown", &json!([1, 2, 3])).is_ok());
  }
}
