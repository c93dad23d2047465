use proc_macro2::TokenStream;
use quote::quote;
use serde_json::Value;

use super::{generate_attributes, generate_derives, generate_items};
use crate::generator::{
  ast::EnumUnit,
  property::{
    EnumBacking,
    contract::support,
    literals::{int_literal, json_literal, typed_int_literal},
  },
};

pub(crate) struct EnumGenerator<'a> {
  unit: &'a EnumUnit,
}

impl<'a> EnumGenerator<'a> {
  pub(crate) fn new(unit: &'a EnumUnit) -> Self {
    Self { unit }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let name = self.unit.name();
    let docs = self.unit.docs();
    let derives = generate_derives(
      &[
        quote! { Debug },
        quote! { Clone },
        quote! { Copy },
        quote! { PartialEq },
        quote! { Eq },
        quote! { Hash },
      ],
      self.unit.extensions(),
    );
    let attributes = generate_attributes(self.unit.extensions());
    let cases = self.unit.cases().iter().map(|case| &case.ident);
    let methods = self.generate_methods();
    let items = generate_items(self.unit.extensions());

    quote! {
      #docs
      #[allow(non_camel_case_types)]
      #derives
      #attributes
      pub enum #name {
        #(#cases),*
      }

      #methods
      #items
    }
  }

  fn generate_methods(&self) -> TokenStream {
    let support = support();
    let name = self.unit.name();
    let count = self.unit.cases().len();
    let all = self.unit.cases().iter().map(|case| {
      let ident = &case.ident;
      quote! { Self::#ident }
    });
    let lookup = self.generate_lookup();
    let encoded = self.unit.cases().iter().map(|case| {
      let ident = &case.ident;
      let literal = encode_literal(&case.literal);
      quote! { Self::#ident => #literal }
    });
    let message = format!("is not a valid {name}");
    let extra = self.unit.extensions().methods();

    quote! {
      impl #name {
        /// Every case, in declaration order.
        pub const ALL: [Self; #count] = [#(#all),*];

        pub fn try_from_json(value: &#support::serde_json::Value) -> Option<Self> {
          #lookup
        }

        pub fn from_json(value: &#support::serde_json::Value) -> Result<Self, #support::ValidationError> {
          Self::try_from_json(value).ok_or_else(|| #support::ValidationError::new(format!("{} {}", value, #message)))
        }

        pub fn to_json(&self) -> #support::serde_json::Value {
          match self {
            #(#encoded),*
          }
        }

        #(#extra)*
      }
    }
  }

  fn generate_lookup(&self) -> TokenStream {
    match self.unit.backing() {
      EnumBacking::String => {
        let arms = self.unit.cases().iter().filter_map(|case| {
          let ident = &case.ident;
          case.literal.as_str().map(|text| quote! { #text => Some(Self::#ident) })
        });
        quote! {
          match value.as_str()? {
            #(#arms,)*
            _ => None,
          }
        }
      }
      EnumBacking::Integer => {
        let arms = self.unit.cases().iter().filter_map(|case| {
          let ident = &case.ident;
          case.literal.as_i64().map(|integer| {
            let integer = int_literal(integer);
            quote! { #integer => Some(Self::#ident) }
          })
        });
        quote! {
          match value.as_i64()? {
            #(#arms,)*
            _ => None,
          }
        }
      }
      EnumBacking::Mixed => quote! {
        Self::ALL.into_iter().find(|case| &case.to_json() == value)
      },
    }
  }
}

fn encode_literal(literal: &Value) -> TokenStream {
  let support = support();
  match literal {
    Value::String(text) => quote! { #support::serde_json::Value::String(#text.to_owned()) },
    Value::Number(number) => match number.as_i64() {
      Some(integer) => {
        let integer = typed_int_literal(integer);
        quote! { #support::serde_json::Value::from(#integer) }
      }
      None => json_literal(literal),
    },
    other => json_literal(other),
  }
}
