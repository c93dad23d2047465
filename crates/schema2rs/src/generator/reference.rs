use std::{
  collections::{BTreeMap, BTreeSet},
  sync::Arc,
};

use indexmap::IndexMap;
use proc_macro2::TokenStream;
use quote::quote;
use serde_json::Value;

use crate::{
  generator::{
    ast::TypePath,
    property::{
      EnumDefinition,
      contract::receiver,
      enums::resolve_enum,
      literals::json_literal,
    },
  },
  utils::SchemaExt,
};

/// Answers `$ref` lookups during resolution. Lookups never fail: anything that cannot be
/// classified is [`ReferencedType::Unknown`].
pub trait ReferenceLookup {
  fn lookup_reference(&self, pointer: &str) -> ReferencedType;

  /// The schema a local pointer designates, used when merging `allOf` branches.
  fn lookup_schema(&self, pointer: &str) -> Option<Value>;
}

/// What a `$ref` points at.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferencedType {
  /// A generated (or externally supplied) struct. `boxed` targets take part in a reference
  /// cycle and are stored behind a `Box` when held directly.
  Class { path: TypePath, boxed: bool },
  Enum { path: TypePath, definition: EnumDefinition },
  /// Anything else; stored and passed through as a JSON value.
  Unknown { pointer: String },
}

impl ReferencedType {
  pub fn annotation(&self) -> String {
    match self {
      Self::Class { path, .. } | Self::Enum { path, .. } => path.name().to_string(),
      Self::Unknown { .. } => "mixed".to_string(),
    }
  }

  /// Same target, held by value. Collections already provide the indirection.
  #[must_use]
  pub fn unboxed(&self) -> Self {
    match self {
      Self::Class { path, .. } => Self::Class {
        path: path.clone(),
        boxed: false,
      },
      other => other.clone(),
    }
  }

  pub fn is_boxed(&self) -> bool {
    matches!(self, Self::Class { boxed: true, .. })
  }

  /// Type of the value without any indirection.
  pub fn view_type(&self) -> Option<TokenStream> {
    match self {
      Self::Class { path, .. } | Self::Enum { path, .. } => Some(quote! { #path }),
      Self::Unknown { .. } => None,
    }
  }

  pub fn storage_type(&self) -> Option<TokenStream> {
    match self {
      Self::Class { path, boxed: true } => Some(quote! { Box<#path> }),
      other => other.view_type(),
    }
  }

  pub fn input_assertion(&self, raw: &TokenStream) -> TokenStream {
    match self {
      Self::Class { path, .. } => quote! { #path::validate_input(#raw).is_ok() },
      Self::Enum { path, .. } => quote! { #path::try_from_json(#raw).is_some() },
      Self::Unknown { .. } => quote! { true },
    }
  }

  pub fn input_mapping(&self, raw: &TokenStream) -> TokenStream {
    match self {
      Self::Class { path, boxed: false } => quote! { #path::build_from_input(#raw, validate)? },
      Self::Class { path, boxed: true } => quote! { Box::new(#path::build_from_input(#raw, validate)?) },
      Self::Enum { path, .. } => quote! { #path::from_json(#raw)? },
      Self::Unknown { .. } => quote! { (#raw).clone() },
    }
  }

  pub fn output_mapping(&self, value: &TokenStream) -> TokenStream {
    let value = receiver(value);
    match self {
      Self::Class { .. } | Self::Enum { .. } => quote! { #value.to_json() },
      Self::Unknown { .. } => quote! { #value.clone() },
    }
  }

  pub fn clone_expression(&self, value: &TokenStream) -> Option<TokenStream> {
    let value = receiver(value);
    match self {
      Self::Class { .. } | Self::Unknown { .. } => Some(quote! { #value.clone() }),
      Self::Enum { .. } => None,
    }
  }

  pub fn literal_expression(&self, literal: &Value) -> Option<TokenStream> {
    match self {
      Self::Class { .. } => None,
      Self::Enum { path, definition } => definition.case_for(literal).map(|case| {
        let ident = &case.ident;
        quote! { #path::#ident }
      }),
      Self::Unknown { .. } => Some(json_literal(literal)),
    }
  }
}

/// Default lookup over one root document: its definitions, arbitrary local pointers and
/// user-supplied mappings for references generated elsewhere.
pub struct SchemaLookup {
  root: Arc<Value>,
  root_path: TypePath,
  definitions: IndexMap<String, ReferencedType>,
  external: BTreeMap<String, TypePath>,
  cyclic: BTreeSet<String>,
}

impl SchemaLookup {
  pub fn new(root: Arc<Value>, root_path: TypePath) -> Self {
    Self {
      root,
      root_path,
      definitions: IndexMap::new(),
      external: BTreeMap::new(),
      cyclic: BTreeSet::new(),
    }
  }

  /// Pointers taking part in a reference cycle; class references to them are boxed.
  #[must_use]
  pub fn with_cycles(mut self, cycles: &[Vec<String>]) -> Self {
    self.cyclic = cycles.iter().flatten().cloned().collect();
    self
  }

  /// Registers a definition. Must run after [`Self::with_cycles`] so cyclic targets are boxed.
  #[must_use]
  pub fn with_definition(mut self, pointer: &str, path: TypePath, schema: &Value, enums_supported: bool) -> Self {
    let boxed = self.cyclic.contains(pointer);
    let referenced = classify(pointer, path, schema, enums_supported, boxed);
    self.definitions.insert(pointer.to_string(), referenced);
    self
  }

  #[must_use]
  pub fn with_external(mut self, pointer: impl Into<String>, path: TypePath) -> Self {
    self.external.insert(pointer.into(), path);
    self
  }
}

fn classify(pointer: &str, path: TypePath, schema: &Value, enums_supported: bool, boxed: bool) -> ReferencedType {
  if schema.enum_values().is_some() {
    return match resolve_enum(schema, enums_supported) {
      Ok(definition) => ReferencedType::Enum { path, definition },
      Err(_) => ReferencedType::Unknown {
        pointer: pointer.to_string(),
      },
    };
  }

  if schema.is_class_shaped() || schema.all_of().is_some() {
    ReferencedType::Class { path, boxed }
  } else {
    ReferencedType::Unknown {
      pointer: pointer.to_string(),
    }
  }
}

impl ReferenceLookup for SchemaLookup {
  fn lookup_reference(&self, pointer: &str) -> ReferencedType {
    if let Some(path) = self.external.get(pointer) {
      return ReferencedType::Class {
        path: path.clone(),
        boxed: false,
      };
    }

    if pointer == "#" {
      return ReferencedType::Class {
        path: self.root_path.clone(),
        boxed: self.cyclic.contains(pointer),
      };
    }

    self
      .definitions
      .get(pointer)
      .cloned()
      .unwrap_or_else(|| ReferencedType::Unknown {
        pointer: pointer.to_string(),
      })
  }

  fn lookup_schema(&self, pointer: &str) -> Option<Value> {
    if self.external.contains_key(pointer) {
      return None;
    }
    let path = pointer.strip_prefix('#')?;
    self.root.pointer(path).cloned()
  }
}
