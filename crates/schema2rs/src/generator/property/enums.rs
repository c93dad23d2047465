use serde_json::Value;

use crate::{
  generator::{ast::TypeToken, errors::EnumError, naming::enum_cases::case_identifiers},
  utils::SchemaExt,
};

/// Representation of the literals behind a generated enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumBacking {
  String,
  Integer,
  /// Strings and integers mixed; matched against the raw JSON value.
  Mixed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumCase {
  pub ident: TypeToken,
  pub literal: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
  pub backing: EnumBacking,
  pub cases: Vec<EnumCase>,
}

impl EnumDefinition {
  pub fn case_for(&self, literal: &Value) -> Option<&EnumCase> {
    self.cases.iter().find(|case| &case.literal == literal)
  }
}

/// Turns the `enum` keyword of `schema` into case identifiers and a backing representation.
///
/// `null` literals get no case: the resolver makes the property nullable instead, so `null`
/// decodes as `None`. Duplicate literals collapse into one case.
pub fn resolve_enum(schema: &Value, enums_supported: bool) -> Result<EnumDefinition, EnumError> {
  if !enums_supported {
    return Err(EnumError::Unsupported);
  }

  let mut literals: Vec<Value> = Vec::new();
  for value in schema.enum_values().into_iter().flatten() {
    if !value.is_null() && !literals.contains(value) {
      literals.push(value.clone());
    }
  }

  if literals.is_empty() {
    return Err(EnumError::Empty);
  }

  if let Some(unsupported) = literals.iter().find(|literal| !is_supported_literal(literal)) {
    return Err(EnumError::UnsupportedLiteral {
      literal: unsupported.to_string(),
    });
  }

  let backing = infer_backing(schema.schema_type(), &literals);
  let cases = case_identifiers(&literals)
    .into_iter()
    .zip(literals)
    .map(|(ident, literal)| EnumCase {
      ident: TypeToken::new(ident),
      literal,
    })
    .collect();

  Ok(EnumDefinition { backing, cases })
}

fn is_supported_literal(literal: &Value) -> bool {
  literal.is_string() || literal.is_i64()
}

fn infer_backing(declared: Option<&str>, literals: &[Value]) -> EnumBacking {
  let all_strings = literals.iter().all(Value::is_string);
  let all_integers = literals.iter().all(Value::is_i64);

  match declared {
    Some("string") if all_strings => EnumBacking::String,
    Some("integer") if all_integers => EnumBacking::Integer,
    None if all_strings => EnumBacking::String,
    None if all_integers => EnumBacking::Integer,
    _ => EnumBacking::Mixed,
  }
}
