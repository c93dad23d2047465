use thiserror::Error;

/// Raised by generated `build_from_input` and validated `with_*` mutators when a value
/// does not satisfy its schema. Carries one message per violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct ValidationError {
  messages: Vec<String>,
}

impl ValidationError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      messages: vec![message.into()],
    }
  }

  pub fn from_messages(messages: impl IntoIterator<Item = String>) -> Self {
    Self {
      messages: messages.into_iter().collect(),
    }
  }

  pub fn missing_property(key: &str) -> Self {
    Self::new(format!("required property '{key}' is missing"))
  }

  pub fn unexpected_type(expected: &str, actual: &serde_json::Value) -> Self {
    Self::new(format!("expected {expected}, found {}", json_type_name(actual)))
  }

  pub fn messages(&self) -> &[String] {
    &self.messages
  }

  /// Prefixes every message with the property the error was raised for.
  #[must_use]
  pub fn at(self, key: &str) -> Self {
    Self {
      messages: self.messages.into_iter().map(|m| format!("{key}: {m}")).collect(),
    }
  }
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
  match value {
    serde_json::Value::Null => "null",
    serde_json::Value::Bool(_) => "boolean",
    serde_json::Value::Number(n) if n.is_f64() => "number",
    serde_json::Value::Number(_) => "integer",
    serde_json::Value::String(_) => "string",
    serde_json::Value::Array(_) => "array",
    serde_json::Value::Object(_) => "object",
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_messages_are_joined() {
    let error = ValidationError::from_messages(["a is too short".to_string(), "b is missing".to_string()]);
    assert_eq!(error.to_string(), "a is too short; b is missing");
    assert_eq!(error.messages().len(), 2);
  }

  #[test]
  fn test_at_prefixes_every_message() {
    let error = ValidationError::unexpected_type("string", &json!(12)).at("name");
    assert_eq!(error.to_string(), "name: expected string, found integer");
  }

  #[test]
  fn test_missing_property() {
    assert_eq!(
      ValidationError::missing_property("city").to_string(),
      "required property 'city' is missing"
    );
  }
}
