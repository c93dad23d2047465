use quote::quote;
use serde_json::{Value, json};

use super::{contains, path, pretty};
use crate::generator::{
  ast::{EnumCaseUnit, EnumUnit, TypeToken},
  codegen::enums::EnumGenerator,
  property::EnumBacking,
};

fn unit(name: &str, backing: EnumBacking, cases: &[(&str, Value)]) -> EnumUnit {
  EnumUnit::builder()
    .path(path(name))
    .backing(backing)
    .cases(
      cases
        .iter()
        .map(|(ident, literal)| EnumCaseUnit {
          ident: TypeToken::new(ident),
          literal: literal.clone(),
        })
        .collect(),
    )
    .build()
}

#[test]
fn test_string_enum() {
  let status = unit(
    "Status",
    EnumBacking::String,
    &[("DRAFT", json!("draft")), ("PUBLISHED", json!("published"))],
  );
  let generated = EnumGenerator::new(&status).generate();

  assert!(contains(
    &generated,
    &quote! {
      #[allow(non_camel_case_types)]
      #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
      pub enum Status { DRAFT, PUBLISHED }
    }
  ));
  assert!(contains(
    &generated,
    &quote! { pub const ALL: [Self; 2usize] = [Self::DRAFT, Self::PUBLISHED]; }
  ));
  assert!(contains(
    &generated,
    &quote! { match value.as_str()? { "draft" => Some(Self::DRAFT), "published" => Some(Self::PUBLISHED), _ => None, } }
  ));
  assert!(contains(
    &generated,
    &quote! { Self::DRAFT => ::schema2rs_support::serde_json::Value::String("draft".to_owned()) }
  ));
}

#[test]
fn test_integer_enum() {
  let priority = unit(
    "Priority",
    EnumBacking::Integer,
    &[("VALUE_1", json!(1)), ("VALUE_MINUS_2", json!(-2))],
  );
  let generated = EnumGenerator::new(&priority).generate();

  assert!(contains(
    &generated,
    &quote! { match value.as_i64()? { 1 => Some(Self::VALUE_1), -2 => Some(Self::VALUE_MINUS_2), _ => None, } }
  ));
  assert!(contains(
    &generated,
    &quote! { Self::VALUE_1 => ::schema2rs_support::serde_json::Value::from(1i64) }
  ));
  assert!(contains(
    &generated,
    &quote! { Self::VALUE_MINUS_2 => ::schema2rs_support::serde_json::Value::from(-2i64) }
  ));
}

#[test]
fn test_mixed_enum_matches_raw_value() {
  let mixed = unit(
    "Code",
    EnumBacking::Mixed,
    &[("VALUE_1", json!(1)), ("VALUE_2", json!("2")), ("VALUE_TWO", json!("two"))],
  );
  let generated = EnumGenerator::new(&mixed).generate();

  assert!(contains(
    &generated,
    &quote! { Self::ALL.into_iter().find(|case| &case.to_json() == value) }
  ));
}

#[test]
fn test_from_json_error_names_the_enum() {
  let status = unit("Status", EnumBacking::String, &[("ACTIVE", json!("active"))]);
  let source = pretty(EnumGenerator::new(&status).generate());

  assert!(source.contains(r#""is not a valid Status""#));
  assert!(source.contains("pub fn to_json(&self) -> ::schema2rs_support::serde_json::Value"));
}
