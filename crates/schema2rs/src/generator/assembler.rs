//! Turns resolved properties into the units codegen renders.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use serde_json::{Map, Value};

use crate::{
  generator::{
    ast::{
      ClassUnit, Dispatch, Documentation, EnumCaseUnit, EnumUnit, FieldToken, FieldUnit, TypeToken, UnionUnit, VariantUnit,
    },
    definitions::DEFINITION_KEYWORDS,
    naming::{definitions::LOCAL_POINTER_PREFIX, identifiers::ensure_unique},
    property::{DynamicProperty, EnumTarget, FieldProperty, Property, PropertyContract, UnionProperty, contract::support},
    request::GeneratorRequest,
  },
  utils::SchemaExt,
};

/// A property of the struct being assembled, in declaration order.
pub(crate) struct ResolvedField<'a> {
  pub key: &'a str,
  pub node: &'a Value,
  pub property: FieldProperty,
}

pub(crate) struct ClassAssembler<'a> {
  request: &'a GeneratorRequest,
  schema: &'a Value,
  root: &'a Value,
}

impl<'a> ClassAssembler<'a> {
  /// `schema` is the object schema of the struct after `allOf` merging.
  pub(crate) fn new(request: &'a GeneratorRequest, schema: &'a Value, root: &'a Value) -> Self {
    Self { request, schema, root }
  }

  pub(crate) fn assemble(&self, fields: &[ResolvedField<'_>]) -> ClassUnit {
    let mut used = BTreeSet::new();
    let units = fields
      .iter()
      .map(|field| {
        let ident = unique_field(field.key, &mut used);
        field_unit(field, ident)
      })
      .collect();

    ClassUnit::builder()
      .path(self.request.type_path())
      .docs(Documentation::from_schema(self.schema.title(), self.schema.description()))
      .schema(embedded_schema(self.schema, self.root, self.request.pointer() == "#"))
      .fields(units)
      .build()
  }
}

fn unique_field(key: &str, used: &mut BTreeSet<String>) -> FieldToken {
  let candidate = FieldToken::from_key(key);
  let base = match candidate.as_str() {
    "_" => "unnamed",
    other => other,
  };
  let name = ensure_unique(base, used);
  used.insert(name.clone());
  FieldToken::from_ident(&name)
}

fn field_unit(field: &ResolvedField<'_>, ident: FieldToken) -> FieldUnit {
  let contract = field.property.contract();
  let key = field.key;
  let stored = quote! { self.#ident };
  let param = quote! { #ident };
  let (accessor_type, accessor_body) = contract.accessor(&stored);
  let decode = contract.input_mapping(&contract.raw_input(&quote! { object }, key));
  let encode = contract.encode_statement(&format_ident!("output"), key, &quote! { &self.#ident });
  let clone = contract.clone_expression(&stored).unwrap_or_else(|| stored.clone());

  FieldUnit::builder()
    .key(key.to_string())
    .ident(ident)
    .docs(Documentation::from_schema(field.node.title(), field.node.description()))
    .annotation(contract.type_annotation())
    .field_type(contract.field_type())
    .mutator_type(contract.mutator_type())
    .accessor_type(accessor_type)
    .accessor_body(accessor_body)
    .decode(decode)
    .encode(encode)
    .clone(clone)
    .maybe_assertion(contract.assertion(&quote! { &#param }, key))
    .assign(contract.wrap_present(&param))
    .maybe_absent(contract.absent_value())
    .build()
}

pub(crate) fn assemble_enum(target: &EnumTarget) -> EnumUnit {
  let cases = target
    .definition
    .cases
    .iter()
    .map(|case| EnumCaseUnit {
      ident: case.ident.clone(),
      literal: case.literal.clone(),
    })
    .collect();

  EnumUnit::builder()
    .path(target.path.clone())
    .docs(target.docs.clone())
    .backing(target.definition.backing)
    .cases(cases)
    .build()
}

fn variant_unit(variant: &TypeToken, property: &Property, condition: TokenStream) -> VariantUnit {
  VariantUnit {
    ident: variant.clone(),
    storage: property.field_type(),
    condition,
    decode: property.input_mapping(&quote! { input }),
    encode: property.output_mapping(&quote! { value }),
  }
}

pub(crate) fn assemble_union(union: &UnionProperty) -> UnionUnit {
  let variants = union
    .alternatives
    .iter()
    .map(|alternative| {
      let condition = alternative.property.input_assertion(&quote! { input });
      variant_unit(&alternative.variant, &alternative.property, condition)
    })
    .collect();

  UnionUnit::builder()
    .path(union.path.clone())
    .docs(union.docs.clone())
    .dispatch(Dispatch::Alternatives)
    .variants(variants)
    .build()
}

pub(crate) fn assemble_entry(dynamic: &DynamicProperty) -> UnionUnit {
  let support = support();
  let variants = dynamic
    .patterns()
    .map(|branch| {
      let pattern = branch.pattern.as_deref().unwrap_or_default();
      let condition = quote! { #support::decode::matches_pattern(#pattern, key) };
      variant_unit(&branch.variant, &branch.property, condition)
    })
    .collect();
  let fallback = dynamic
    .catch_all()
    .map(|branch| variant_unit(&branch.variant, &branch.property, quote! { true }));

  UnionUnit::builder()
    .path(dynamic.entry.clone())
    .dispatch(Dispatch::Entries)
    .variants(variants)
    .maybe_fallback(fallback)
    .build()
}

/// JSON text of `schema` as embedded in the generated `SCHEMA` constant.
///
/// The root definitions are attached so local references keep resolving. References the
/// runtime validator could not resolve (remote documents, dangling pointers, pointers outside
/// the definitions) are replaced by the empty schema.
pub(crate) fn embedded_schema(schema: &Value, root: &Value, is_root: bool) -> String {
  let mut embedded = detach_references(schema, root, is_root);
  if let Value::Object(target) = &mut embedded {
    for keyword in DEFINITION_KEYWORDS {
      if let Some(definitions) = root.get(keyword) {
        target.insert(keyword.to_string(), detach_references(definitions, root, is_root));
      }
    }
  }
  embedded.to_string()
}

fn detach_references(node: &Value, root: &Value, is_root: bool) -> Value {
  match node {
    Value::Object(entries) => {
      if let Some(reference) = node.reference()
        && !is_resolvable(reference, root, is_root)
      {
        return Value::Object(Map::new());
      }
      Value::Object(
        entries
          .iter()
          .map(|(key, child)| (key.clone(), detach_references(child, root, is_root)))
          .collect(),
      )
    }
    Value::Array(items) => Value::Array(items.iter().map(|item| detach_references(item, root, is_root)).collect()),
    other => other.clone(),
  }
}

fn is_resolvable(reference: &str, root: &Value, is_root: bool) -> bool {
  if reference == "#" {
    return is_root;
  }
  let Some(path) = reference.strip_prefix(LOCAL_POINTER_PREFIX) else {
    return false;
  };
  DEFINITION_KEYWORDS
    .iter()
    .any(|keyword| path.split('/').next() == Some(*keyword))
    && root.pointer(&format!("/{path}")).is_some()
}
