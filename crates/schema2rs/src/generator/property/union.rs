use serde_json::Value;

use crate::{
  generator::{
    ast::{Documentation, TypeToken},
    errors::GeneratorResult,
    property::{Property, ScalarKind, UnionAlternative, UnionProperty, resolver::PropertyResolver},
  },
  utils::SchemaExt,
};

/// Resolves `oneOf`/`anyOf`. Alternatives are tried in order at decode time, so their order is
/// kept. When every alternative is the same scalar the union collapses into that scalar.
/// Variants are named after the declared position, skipped `null` alternatives included.
pub(super) fn resolve_union(
  resolver: &PropertyResolver<'_>,
  key: &str,
  suffix: &str,
  node: &Value,
  pointer: &str,
) -> GeneratorResult<Property> {
  let keyword = if node.get("oneOf").and_then(Value::as_array).is_some() {
    "oneOf"
  } else {
    "anyOf"
  };

  let mut alternatives = vec![];
  for (index, alternative) in node.alternatives().into_iter().flatten().enumerate() {
    // `null` alternatives make the whole union nullable instead of becoming a variant.
    if alternative.is_null_schema() {
      continue;
    }
    let variant = format!("Alternative{}", index + 1);
    let property = resolver.resolve_property(
      key,
      &format!("{suffix}{variant}"),
      alternative,
      &format!("{pointer}/{keyword}/{index}"),
    )?;
    alternatives.push(UnionAlternative {
      variant: TypeToken::new(variant),
      property,
    });
  }

  if alternatives.is_empty() {
    return Ok(Property::Mixed);
  }
  if let Some(kind) = collapsed_scalar(&alternatives) {
    return Ok(Property::Scalar(kind));
  }

  Ok(Property::Union(UnionProperty {
    path: resolver.type_path_for(key, suffix),
    alternatives,
    docs: Documentation::from_schema(node.title(), node.description()),
  }))
}

fn collapsed_scalar(alternatives: &[UnionAlternative]) -> Option<ScalarKind> {
  let first = alternatives.first()?.property.scalar_kind()?;
  alternatives
    .iter()
    .all(|alternative| alternative.property.scalar_kind() == Some(first))
    .then_some(first)
}
