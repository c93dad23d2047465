//! `allOf` merging.
//!
//! Branches merge left to right into a single object schema. `required` is an ordered union,
//! later `properties` overwrite earlier ones, `$ref` branches are merged through the reference
//! lookup, and `oneOf`/`anyOf` branches first reduce to the properties every alternative might
//! carry and the keys every alternative requires. The node's own keywords merge last.

use indexmap::IndexSet;
use serde_json::{Map, Value, json};

use crate::{
  generator::{
    errors::{GeneratorError, GeneratorResult, ResolutionError},
    request::GeneratorRequest,
  },
  utils::SchemaExt,
};

#[derive(Debug, Default)]
struct MergedObject {
  properties: Map<String, Value>,
  required: IndexSet<String>,
  additional_properties: Option<Value>,
}

impl MergedObject {
  fn absorb(&mut self, schema: &Value) {
    if let Some(properties) = schema.properties() {
      for (key, property) in properties {
        self.properties.insert(key.clone(), property.clone());
      }
    }
    self
      .required
      .extend(schema.required_keys().into_iter().map(str::to_owned));
    if self.additional_properties.is_none() {
      self.additional_properties = schema.get("additionalProperties").cloned();
    }
  }

  fn into_schema(self, base: &Value) -> Value {
    let mut schema = match base {
      Value::Object(map) => map.clone(),
      _ => Map::new(),
    };
    schema.remove("allOf");
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(self.properties));
    if self.required.is_empty() {
      schema.remove("required");
    } else {
      schema.insert("required".to_string(), required_array(self.required));
    }
    if let Some(additional) = self.additional_properties {
      schema.insert("additionalProperties".to_string(), additional);
    }
    Value::Object(schema)
  }
}

fn required_array(required: IndexSet<String>) -> Value {
  Value::Array(required.into_iter().map(Value::String).collect())
}

/// Merges the `allOf` of `node` into one object schema without an `allOf` keyword.
pub fn merge_all_of(node: &Value, request: &GeneratorRequest, pointer: &str) -> GeneratorResult<Value> {
  merge_at_depth(node, request, pointer, 0)
}

fn merge_at_depth(node: &Value, request: &GeneratorRequest, pointer: &str, depth: usize) -> GeneratorResult<Value> {
  let max_depth = request.options().max_depth;
  if depth > max_depth {
    return Err(GeneratorError::resolution(
      pointer,
      ResolutionError::DepthExceeded { max_depth },
    ));
  }

  let mut merged = MergedObject::default();
  for (index, branch) in node.all_of().into_iter().flatten().enumerate() {
    let branch_pointer = format!("{pointer}/allOf/{index}");
    let branch = merge_branch(branch, index, request, &branch_pointer, depth)?;
    merged.absorb(&branch);
  }
  merged.absorb(node);

  Ok(merged.into_schema(node))
}

fn merge_branch(
  branch: &Value,
  index: usize,
  request: &GeneratorRequest,
  pointer: &str,
  depth: usize,
) -> GeneratorResult<Value> {
  let branch = dereference(branch, request, pointer)?;

  match &branch {
    Value::Bool(true) => return Ok(Value::Object(Map::new())),
    Value::Object(_) => {}
    _ => {
      return Err(GeneratorError::resolution(
        pointer,
        ResolutionError::UnsupportedBranch { index },
      ));
    }
  }

  if branch.all_of().is_some() {
    return merge_at_depth(&branch, request, pointer, depth + 1);
  }

  if let Some(alternatives) = branch.alternatives() {
    let mut merged = MergedObject::default();
    let keyword = if branch.get("oneOf").is_some() { "oneOf" } else { "anyOf" };
    let alternatives_pointer = format!("{pointer}/{keyword}");
    merged.absorb(&merge_alternatives(alternatives, request, &alternatives_pointer, depth)?);
    merged.absorb(&branch);
    return Ok(merged.into_schema(&Value::Object(Map::new())));
  }

  if matches!(branch.schema_type(), None | Some("object")) {
    Ok(branch)
  } else {
    Err(GeneratorError::resolution(
      pointer,
      ResolutionError::UnsupportedBranch { index },
    ))
  }
}

/// Properties of any alternative, required only when every alternative requires them.
fn merge_alternatives(
  alternatives: &[Value],
  request: &GeneratorRequest,
  pointer: &str,
  depth: usize,
) -> GeneratorResult<Value> {
  let mut properties = Map::new();
  let mut required: Option<IndexSet<String>> = None;

  for (index, alternative) in alternatives.iter().enumerate() {
    let alternative_pointer = format!("{pointer}/{index}");
    let alternative = dereference(alternative, request, &alternative_pointer)?;
    let alternative = if alternative.all_of().is_some() {
      merge_at_depth(&alternative, request, &alternative_pointer, depth + 1)?
    } else {
      alternative
    };

    if let Some(alternative_properties) = alternative.properties() {
      for (key, property) in alternative_properties {
        properties.entry(key.clone()).or_insert_with(|| property.clone());
      }
    }

    let keys: IndexSet<String> = alternative.required_keys().into_iter().map(str::to_owned).collect();
    required = Some(match required {
      None => keys,
      Some(previous) => previous.intersection(&keys).cloned().collect(),
    });
  }

  let mut schema = Map::new();
  schema.insert("properties".to_string(), Value::Object(properties));
  if let Some(required) = required.filter(|required| !required.is_empty()) {
    schema.insert("required".to_string(), required_array(required));
  }
  Ok(Value::Object(schema))
}

/// Follows `$ref` chains through the lookup. Non-reference nodes come back unchanged.
fn dereference(node: &Value, request: &GeneratorRequest, pointer: &str) -> GeneratorResult<Value> {
  let mut current = node.clone();
  let mut hops = 0;

  while let Some(reference) = current.reference() {
    hops += 1;
    if hops > request.options().max_depth {
      return Err(GeneratorError::resolution(
        pointer,
        ResolutionError::DepthExceeded {
          max_depth: request.options().max_depth,
        },
      ));
    }
    current = request
      .lookup()
      .lookup_schema(reference)
      .ok_or_else(|| {
        GeneratorError::resolution(
          pointer,
          ResolutionError::UnresolvedReference {
            reference: reference.to_string(),
          },
        )
      })?;
  }

  Ok(current)
}
