//! Extension points invoked after a unit is assembled and before it is rendered.
//!
//! Hooks run in registration order and only see the additive API of a unit, so they can
//! attach derives, attributes, methods and items but never change fields or variants.

use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;

use crate::generator::{
  ast::{ClassUnit, Dispatch, EnumUnit, FileUnit, TypeToken, UnionUnit},
  property::contract::support,
};

type ClassHook = Box<dyn Fn(&TypeToken, &mut ClassUnit)>;
type EnumHook = Box<dyn Fn(&TypeToken, &mut EnumUnit)>;
type UnionHook = Box<dyn Fn(&TypeToken, &mut UnionUnit)>;
type FileHook = Box<dyn Fn(&Path, &mut FileUnit)>;

#[derive(Default)]
pub struct Hooks {
  class: Vec<ClassHook>,
  enumeration: Vec<EnumHook>,
  union: Vec<UnionHook>,
  file: Vec<FileHook>,
}

impl Hooks {
  #[must_use]
  pub fn on_class_realized(mut self, hook: impl Fn(&TypeToken, &mut ClassUnit) + 'static) -> Self {
    self.class.push(Box::new(hook));
    self
  }

  #[must_use]
  pub fn on_enum_realized(mut self, hook: impl Fn(&TypeToken, &mut EnumUnit) + 'static) -> Self {
    self.enumeration.push(Box::new(hook));
    self
  }

  #[must_use]
  pub fn on_union_realized(mut self, hook: impl Fn(&TypeToken, &mut UnionUnit) + 'static) -> Self {
    self.union.push(Box::new(hook));
    self
  }

  #[must_use]
  pub fn on_file_realized(mut self, hook: impl Fn(&Path, &mut FileUnit) + 'static) -> Self {
    self.file.push(Box::new(hook));
    self
  }

  /// Appends every hook of `other` after the hooks registered here.
  #[must_use]
  pub fn merge(mut self, other: Hooks) -> Self {
    self.class.extend(other.class);
    self.enumeration.extend(other.enumeration);
    self.union.extend(other.union);
    self.file.extend(other.file);
    self
  }

  pub(crate) fn apply_class(&self, unit: &mut ClassUnit) {
    let name = unit.name().clone();
    for hook in &self.class {
      hook(&name, &mut *unit);
    }
  }

  pub(crate) fn apply_enum(&self, unit: &mut EnumUnit) {
    let name = unit.name().clone();
    for hook in &self.enumeration {
      hook(&name, &mut *unit);
    }
  }

  pub(crate) fn apply_union(&self, unit: &mut UnionUnit) {
    let name = unit.name().clone();
    for hook in &self.union {
      hook(&name, &mut *unit);
    }
  }

  pub(crate) fn apply_file(&self, unit: &mut FileUnit) {
    let path = unit.path().clone();
    for hook in &self.file {
      hook(path.as_path(), &mut *unit);
    }
  }
}

/// `serde::Serialize`/`Deserialize` impls that go through `to_json` and the validating decoder.
///
/// Map entry enums need their key to decode and only get `Serialize`.
pub fn serde_hooks() -> Hooks {
  Hooks::default()
    .on_class_realized(|name, unit| {
      unit.add_item(serialize_impl(name));
      unit.add_item(deserialize_impl(name, &quote! { Self::build_from_input(&value, true) }));
    })
    .on_enum_realized(|name, unit| {
      unit.add_item(serialize_impl(name));
      unit.add_item(deserialize_impl(name, &quote! { Self::from_json(&value) }));
    })
    .on_union_realized(|name, unit| {
      unit.add_item(serialize_impl(name));
      if unit.dispatch() == Dispatch::Alternatives {
        unit.add_item(deserialize_impl(name, &quote! { Self::build_from_input(&value, true) }));
      }
    })
}

fn serialize_impl(name: &TypeToken) -> TokenStream {
  let support = support();
  quote! {
    impl #support::serde::Serialize for #name {
      fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
      where
        S: #support::serde::Serializer,
      {
        #support::serde::Serialize::serialize(&self.to_json(), serializer)
      }
    }
  }
}

fn deserialize_impl(name: &TypeToken, decode: &TokenStream) -> TokenStream {
  let support = support();
  quote! {
    impl<'de> #support::serde::Deserialize<'de> for #name {
      fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
      where
        D: #support::serde::Deserializer<'de>,
      {
        let value = <#support::serde_json::Value as #support::serde::Deserialize>::deserialize(deserializer)?;
        #decode.map_err(<D::Error as #support::serde::de::Error>::custom)
      }
    }
  }
}
