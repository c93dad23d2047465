use proc_macro2::TokenStream;
use quote::quote;

use super::generate_type;
use crate::generator::{
  ast::{FileUnit, tokens::ident},
  errors::{GeneratorError, GeneratorResult},
};

pub(crate) struct FileGenerator<'a> {
  unit: &'a FileUnit,
  source_path: &'a str,
}

impl<'a> FileGenerator<'a> {
  pub(crate) fn new(unit: &'a FileUnit, source_path: &'a str) -> Self {
    Self { unit, source_path }
  }

  pub(crate) fn generate_tokens(&self) -> TokenStream {
    let submodules = self.unit.submodules().iter().map(|module| {
      let module = ident(module);
      quote! { pub mod #module; }
    });
    let types = self.unit.types().iter().map(generate_type);
    let items = self.unit.items();

    quote! {
      #(#submodules)*
      #(#types)*
      #(#items)*
    }
  }

  /// Formatted source of the file, headed by a generated-code notice.
  pub(crate) fn generate(&self) -> GeneratorResult<String> {
    let module = self.unit.path().display().to_string();
    let syntax_tree = syn::parse2::<syn::File>(self.generate_tokens()).map_err(|err| GeneratorError::Render {
      module,
      message: err.to_string(),
    })?;
    let formatted = prettyplease::unparse(&syntax_tree);

    Ok(format!(
      r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Source: {}
//! Generated by `schema2rs`

{formatted}",
      self.source_path
    ))
  }
}
