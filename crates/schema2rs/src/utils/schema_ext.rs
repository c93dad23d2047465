use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::generator::property::Container;

static EMPTY_SCHEMA: LazyLock<Value> = LazyLock::new(|| Value::Object(Map::new()));

/// Typed queries over a raw schema node.
///
/// Nodes are plain `serde_json::Value`s; every query tolerates missing or mistyped keywords
/// and answers as if the keyword were absent.
pub(crate) trait SchemaExt {
  /// The declared `type`. For type arrays (`["string", "null"]`) the first non-null entry wins.
  fn schema_type(&self) -> Option<&str>;

  fn is_type(&self, schema_type: &str) -> bool {
    self.schema_type() == Some(schema_type)
  }

  fn format(&self) -> Option<&str>;

  /// Target of a `$ref` keyword.
  fn reference(&self) -> Option<&str>;

  fn all_of(&self) -> Option<&Vec<Value>>;

  /// `oneOf` alternatives, falling back to `anyOf`.
  fn alternatives(&self) -> Option<&Vec<Value>>;

  fn enum_values(&self) -> Option<&Vec<Value>>;

  fn properties(&self) -> Option<&Map<String, Value>>;

  fn pattern_properties(&self) -> Option<&Map<String, Value>>;

  /// `additionalProperties` when it is a schema; booleans carry no type information.
  fn additional_properties(&self) -> Option<&Value>;

  fn required_keys(&self) -> Vec<&str>;

  fn default_value(&self) -> Option<&Value>;

  fn description(&self) -> Option<&str>;

  fn title(&self) -> Option<&str>;

  /// `null` is accepted: listed in a type array, among the `enum` literals or as a
  /// `oneOf`/`anyOf` alternative.
  fn is_nullable(&self) -> bool;

  /// Accepts nothing but `null`.
  fn is_null_schema(&self) -> bool;

  fn is_date_time(&self) -> bool {
    self.is_type("string") && self.format() == Some("date-time")
  }

  fn is_integer(&self) -> bool {
    self.is_type("integer") || (self.is_type("number") && self.format() == Some("integer"))
  }

  /// Object without declared properties whose values all share one schema.
  fn is_map_shaped(&self) -> bool {
    self.properties().is_none()
      && self.pattern_properties().is_none()
      && self.additional_properties().is_some()
      && matches!(self.schema_type(), None | Some("object"))
  }

  /// The container and item schema of an array or map node.
  fn collection_items(&self) -> Option<(Container, &Value)>;

  /// Declares properties or is typed as an object.
  fn is_object_shaped(&self) -> bool {
    self.properties().is_some() || self.is_type("object")
  }

  /// Object-shaped nodes that become a struct of their own rather than a map or dynamic object.
  fn is_class_shaped(&self) -> bool {
    self.properties().is_some()
      || (self.is_type("object") && !self.is_map_shaped() && self.pattern_properties().is_none())
  }
}

impl SchemaExt for Value {
  fn schema_type(&self) -> Option<&str> {
    match self.get("type")? {
      Value::String(schema_type) => Some(schema_type),
      Value::Array(types) => types.iter().filter_map(Value::as_str).find(|t| *t != "null"),
      _ => None,
    }
  }

  fn format(&self) -> Option<&str> {
    self.get("format").and_then(Value::as_str)
  }

  fn reference(&self) -> Option<&str> {
    self.get("$ref").and_then(Value::as_str)
  }

  fn all_of(&self) -> Option<&Vec<Value>> {
    self.get("allOf").and_then(Value::as_array)
  }

  fn alternatives(&self) -> Option<&Vec<Value>> {
    self
      .get("oneOf")
      .and_then(Value::as_array)
      .or_else(|| self.get("anyOf").and_then(Value::as_array))
  }

  fn enum_values(&self) -> Option<&Vec<Value>> {
    self.get("enum").and_then(Value::as_array)
  }

  fn properties(&self) -> Option<&Map<String, Value>> {
    self.get("properties").and_then(Value::as_object)
  }

  fn pattern_properties(&self) -> Option<&Map<String, Value>> {
    self.get("patternProperties").and_then(Value::as_object)
  }

  fn additional_properties(&self) -> Option<&Value> {
    self.get("additionalProperties").filter(|value| value.is_object())
  }

  fn required_keys(&self) -> Vec<&str> {
    self
      .get("required")
      .and_then(Value::as_array)
      .map(|keys| keys.iter().filter_map(Value::as_str).collect())
      .unwrap_or_default()
  }

  fn default_value(&self) -> Option<&Value> {
    self.get("default")
  }

  fn description(&self) -> Option<&str> {
    self.get("description").and_then(Value::as_str)
  }

  fn title(&self) -> Option<&str> {
    self.get("title").and_then(Value::as_str)
  }

  fn is_nullable(&self) -> bool {
    let typed_null = matches!(self.get("type"), Some(Value::Array(types)) if types.iter().any(|t| t == "null"));
    typed_null
      || self.enum_values().is_some_and(|values| values.iter().any(Value::is_null))
      || self
        .alternatives()
        .is_some_and(|alternatives| alternatives.iter().any(SchemaExt::is_null_schema))
  }

  fn is_null_schema(&self) -> bool {
    match self.get("type") {
      Some(Value::String(schema_type)) => schema_type == "null",
      Some(Value::Array(types)) => !types.is_empty() && types.iter().all(|t| t == "null"),
      _ => false,
    }
  }

  fn collection_items(&self) -> Option<(Container, &Value)> {
    if self.is_type("array") {
      let items = self.get("items").filter(|items| items.is_object()).unwrap_or(&*EMPTY_SCHEMA);
      return Some((Container::List, items));
    }
    if self.is_map_shaped() {
      return self.additional_properties().map(|items| (Container::Map, items));
    }
    None
  }
}
