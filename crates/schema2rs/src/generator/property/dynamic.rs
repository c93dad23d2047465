use serde_json::Value;

use crate::{
  generator::{
    ast::TypeToken,
    errors::GeneratorResult,
    property::{
      DynamicBranch, DynamicProperty, Property,
      resolver::{PropertyResolver, entry_pointer},
    },
  },
  utils::SchemaExt,
};

const CATCH_ALL_VARIANT: &str = "Additional";

/// Resolves an object keyed by `patternProperties`. Each pattern becomes one branch of the
/// entry enum, in declaration order, and a schema-valued `additionalProperties` becomes the
/// catch-all branch tried last.
pub(super) fn resolve_dynamic(
  resolver: &PropertyResolver<'_>,
  key: &str,
  suffix: &str,
  node: &Value,
  pointer: &str,
) -> GeneratorResult<Property> {
  let mut branches = vec![];

  for (index, (pattern, schema)) in node.pattern_properties().into_iter().flatten().enumerate() {
    let variant = format!("Pattern{}", index + 1);
    let property = resolver.resolve_property(
      key,
      &format!("{suffix}{variant}"),
      schema,
      &entry_pointer(pointer, "patternProperties", pattern),
    )?;
    branches.push(DynamicBranch {
      variant: TypeToken::new(variant),
      pattern: Some(pattern.clone()),
      property,
    });
  }

  if let Some(additional) = node.additional_properties() {
    let property = resolver.resolve_property(
      key,
      &format!("{suffix}{CATCH_ALL_VARIANT}"),
      additional,
      &format!("{pointer}/additionalProperties"),
    )?;
    branches.push(DynamicBranch {
      variant: TypeToken::new(CATCH_ALL_VARIANT),
      pattern: None,
      property,
    });
  }

  Ok(Property::Dynamic(DynamicProperty {
    entry: resolver.type_path_for(key, &format!("{suffix}Entry")),
    branches,
  }))
}
