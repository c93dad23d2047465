//! Rendering of assembled units into Rust source.

pub mod class;
pub mod enums;
pub mod file;
pub mod unions;

#[cfg(test)]
mod tests;

use proc_macro2::TokenStream;
use quote::quote;

use crate::generator::ast::{Extensions, TypeUnit};

pub(crate) fn generate_type(unit: &TypeUnit) -> TokenStream {
  match unit {
    TypeUnit::Class(class) => class::ClassGenerator::new(class).generate(),
    TypeUnit::Enum(enumeration) => enums::EnumGenerator::new(enumeration).generate(),
    TypeUnit::Union(union) => unions::UnionGenerator::new(union).generate(),
  }
}

/// `#[derive(...)]` with the built-in derives followed by those added by hooks.
pub(crate) fn generate_derives(builtin: &[TokenStream], extensions: &Extensions) -> TokenStream {
  let derives = builtin.iter().chain(extensions.derives());
  quote! { #[derive(#(#derives),*)] }
}

pub(crate) fn generate_attributes(extensions: &Extensions) -> TokenStream {
  let attributes = extensions.attributes();
  quote! { #(#attributes)* }
}

pub(crate) fn generate_items(extensions: &Extensions) -> TokenStream {
  let items = extensions.items();
  quote! { #(#items)* }
}
