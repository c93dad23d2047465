use proc_macro2::TokenStream;
use quote::quote;

use super::{generate_attributes, generate_derives, generate_items};
use crate::generator::{
  ast::{Dispatch, UnionUnit, VariantUnit},
  property::contract::support,
};

pub(crate) struct UnionGenerator<'a> {
  unit: &'a UnionUnit,
}

impl<'a> UnionGenerator<'a> {
  pub(crate) fn new(unit: &'a UnionUnit) -> Self {
    Self { unit }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let support = support();
    let name = self.unit.name();
    let docs = self.unit.docs();
    let derives = generate_derives(
      &[quote! { Debug }, quote! { Clone }, quote! { PartialEq }],
      self.unit.extensions(),
    );
    let attributes = generate_attributes(self.unit.extensions());

    let variants = self.variants().map(|variant| {
      let ident = &variant.ident;
      let storage = &variant.storage;
      quote! { #ident(#storage) }
    });
    let unmatched = self
      .has_unmatched()
      .then(|| quote! { Unmatched(#support::serde_json::Value), });

    let decoding = match self.unit.dispatch() {
      Dispatch::Alternatives => self.generate_alternatives(),
      Dispatch::Entries => self.generate_entries(),
    };
    let encoding = self.generate_encoding();
    let extra = self.unit.extensions().methods();
    let items = generate_items(self.unit.extensions());

    quote! {
      #docs
      #derives
      #attributes
      pub enum #name {
        #(#variants,)*
        #unmatched
      }

      impl #name {
        #decoding
        #encoding
        #(#extra)*
      }

      #items
    }
  }

  fn variants(&self) -> impl Iterator<Item = &VariantUnit> {
    self.unit.variants().iter().chain(self.unit.fallback())
  }

  /// Without a catch-all branch, input nothing accepts is kept as `Unmatched(Value)`.
  fn has_unmatched(&self) -> bool {
    self.unit.fallback().is_none()
  }

  fn fallback_value(&self) -> TokenStream {
    match self.unit.fallback() {
      Some(fallback) => {
        let ident = &fallback.ident;
        let decode = &fallback.decode;
        quote! { Ok(Self::#ident(#decode)) }
      }
      None => quote! { Ok(Self::Unmatched(input.clone())) },
    }
  }

  fn branches(&self) -> impl Iterator<Item = TokenStream> + '_ {
    self.unit.variants().iter().map(|variant| {
      let ident = &variant.ident;
      let condition = &variant.condition;
      let decode = &variant.decode;
      quote! {
        if #condition {
          return Ok(Self::#ident(#decode));
        }
      }
    })
  }

  fn generate_alternatives(&self) -> TokenStream {
    let support = support();
    let branches = self.branches();
    let fallback = self.fallback_value();
    let mut conditions = self.unit.variants().iter().map(|variant| variant.condition.clone());
    let matches = match conditions.next() {
      Some(first) => conditions.fold(first, |any, condition| quote! { #any || #condition }),
      None => quote! { false },
    };

    quote! {
      /// Decodes `input` as the first alternative whose shape accepts it.
      #[allow(unused_variables)]
      pub fn build_from_input(
        input: &#support::serde_json::Value,
        validate: bool,
      ) -> Result<Self, #support::ValidationError> {
        #(#branches)*
        #fallback
      }

      /// Whether any alternative accepts `input`.
      pub fn matches_input(input: &#support::serde_json::Value) -> bool {
        #matches
      }
    }
  }

  fn generate_entries(&self) -> TokenStream {
    let support = support();
    let branches = self.branches();
    let fallback = self.fallback_value();

    quote! {
      /// Decodes the value of map entry `key` as the first branch whose pattern matches the key.
      #[allow(unused_variables)]
      pub fn build_from_entry(
        key: &str,
        input: &#support::serde_json::Value,
        validate: bool,
      ) -> Result<Self, #support::ValidationError> {
        #(#branches)*
        #fallback
      }
    }
  }

  fn generate_encoding(&self) -> TokenStream {
    let support = support();
    let arms = self.variants().map(|variant| {
      let ident = &variant.ident;
      let encode = &variant.encode;
      quote! { Self::#ident(value) => #encode }
    });
    let unmatched = self
      .has_unmatched()
      .then(|| quote! { Self::Unmatched(value) => value.clone(), });

    quote! {
      pub fn to_json(&self) -> #support::serde_json::Value {
        match self {
          #(#arms,)*
          #unmatched
        }
      }
    }
  }
}
