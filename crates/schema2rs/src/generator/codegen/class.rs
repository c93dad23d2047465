use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use super::{generate_attributes, generate_derives, generate_items};
use crate::generator::{
  ast::{ClassUnit, FieldToken, FieldUnit, tokens::ident},
  property::contract::support,
};

/// Inherent methods every generated struct defines. Accessors that would shadow one of them
/// get a `_value` suffix.
pub(crate) const GENERATED_METHODS: [&str; 6] = ["new", "build_from_input", "validate_input", "to_json", "clone", "schema"];

pub(crate) fn accessor_ident(field: &FieldToken) -> Ident {
  if GENERATED_METHODS.contains(&field.bare()) {
    format_ident!("{}_value", field.bare())
  } else {
    ident(field.as_str())
  }
}

/// `ident: value` in a struct expression, shortened to `ident` when the value is the binding
/// of the same name.
fn field_init(ident: &FieldToken, value: &TokenStream) -> TokenStream {
  if value.to_string() == ident.as_str() {
    quote! { #ident }
  } else {
    quote! { #ident: #value }
  }
}

pub(crate) struct ClassGenerator<'a> {
  unit: &'a ClassUnit,
}

impl<'a> ClassGenerator<'a> {
  pub(crate) fn new(unit: &'a ClassUnit) -> Self {
    Self { unit }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let definition = self.generate_definition();
    let inherent = self.generate_impl_block();
    let clone = self.generate_clone_impl();
    let items = generate_items(self.unit.extensions());

    quote! {
      #definition
      #inherent
      #clone
      #items
    }
  }

  fn generate_definition(&self) -> TokenStream {
    let name = self.unit.name();
    let docs = self.unit.docs();
    let derives = generate_derives(&[quote! { Debug }, quote! { PartialEq }], self.unit.extensions());
    let attributes = generate_attributes(self.unit.extensions());
    let fields = self.unit.fields().iter().map(|field| {
      let ident = &field.ident;
      let field_type = &field.field_type;
      quote! { #ident: #field_type }
    });

    quote! {
      #docs
      #derives
      #attributes
      pub struct #name {
        #(#fields),*
      }
    }
  }

  fn generate_impl_block(&self) -> TokenStream {
    let name = self.unit.name();
    let schema = self.unit.schema();
    let constructor = self.generate_constructor();
    let accessors = self.unit.fields().iter().map(generate_accessor);
    let mutators = self.unit.fields().iter().map(generate_mutators);
    let decoding = self.generate_decoding();
    let encoding = self.generate_encoding();
    let extra = self.unit.extensions().methods();

    quote! {
      impl #name {
        /// Schema every decoded value is validated against.
        pub const SCHEMA: &'static str = #schema;

        #constructor
        #(#accessors)*
        #(#mutators)*
        #decoding
        #encoding
        #(#extra)*
      }
    }
  }

  fn generate_constructor(&self) -> TokenStream {
    let fields = self.unit.fields();
    let params = fields.iter().filter(|field| field.is_required()).map(|field| {
      let ident = &field.ident;
      let mutator_type = &field.mutator_type;
      quote! { #ident: #mutator_type }
    });
    let values = fields
      .iter()
      .map(|field| field_init(&field.ident, field.absent.as_ref().unwrap_or(&field.assign)));

    quote! {
      pub fn new(#(#params),*) -> Self {
        Self {
          #(#values),*
        }
      }
    }
  }

  fn generate_decoding(&self) -> TokenStream {
    let support = support();
    let fields = self.unit.fields();

    let body = if fields.is_empty() {
      quote! {
        #support::decode::object(input)?;
        Ok(Self {})
      }
    } else {
      let values = fields.iter().map(|field| {
        let ident = &field.ident;
        let key = &field.key;
        let decode = &field.decode;
        quote! {
          #ident: (|| -> Result<_, #support::ValidationError> { Ok(#decode) })()
            .map_err(|error| error.at(#key))?
        }
      });
      quote! {
        let object = #support::decode::object(input)?;
        Ok(Self {
          #(#values),*
        })
      }
    };

    quote! {
      /// Decodes `input`, validating it against [`Self::SCHEMA`] first when `validate` is set.
      #[allow(unused_variables)]
      pub fn build_from_input(
        input: &#support::serde_json::Value,
        validate: bool,
      ) -> Result<Self, #support::ValidationError> {
        if validate {
          Self::validate_input(input)?;
        }
        #body
      }

      pub fn validate_input(input: &#support::serde_json::Value) -> Result<(), #support::ValidationError> {
        #support::validate(Self::SCHEMA, input)
      }
    }
  }

  fn generate_encoding(&self) -> TokenStream {
    let support = support();
    let statements = self.unit.fields().iter().map(|field| &field.encode);
    let output = if self.unit.fields().is_empty() {
      quote! { let output = #support::serde_json::Map::new(); }
    } else {
      quote! { let mut output = #support::serde_json::Map::new(); }
    };

    quote! {
      pub fn to_json(&self) -> #support::serde_json::Value {
        #output
        #(#statements)*
        #support::serde_json::Value::Object(output)
      }
    }
  }

  fn generate_clone_impl(&self) -> TokenStream {
    let name = self.unit.name();
    let fields = self.unit.fields().iter().map(|field| {
      let ident = &field.ident;
      let clone = &field.clone;
      quote! { #ident: #clone }
    });

    quote! {
      impl Clone for #name {
        fn clone(&self) -> Self {
          Self {
            #(#fields),*
          }
        }
      }
    }
  }
}

fn generate_accessor(field: &FieldUnit) -> TokenStream {
  let method = accessor_ident(&field.ident);
  let docs = &field.docs;
  let annotation = format!(" Type: `{}`", field.annotation);
  let separator = (!docs.is_empty()).then(|| quote! { #[doc = ""] });
  let accessor_type = &field.accessor_type;
  let body = &field.accessor_body;

  quote! {
    #docs
    #separator
    #[doc = #annotation]
    pub fn #method(&self) -> #accessor_type {
      #body
    }
  }
}

fn generate_mutators(field: &FieldUnit) -> TokenStream {
  let support = support();
  let ident = &field.ident;
  let with = field.ident.method("with_");
  let mutator_type = &field.mutator_type;
  let assign = field_init(ident, &field.assign);

  let with_method = match &field.assertion {
    Some(assertion) => quote! {
      pub fn #with(self, #ident: #mutator_type) -> Result<Self, #support::ValidationError> {
        #assertion
        Ok(Self {
          #assign,
          ..self
        })
      }
    },
    None => quote! {
      #[must_use]
      pub fn #with(self, #ident: #mutator_type) -> Self {
        Self {
          #assign,
          ..self
        }
      }
    },
  };

  let without_method = field.absent.as_ref().map(|absent| {
    let without = field.ident.method("without_");
    quote! {
      #[must_use]
      pub fn #without(self) -> Self {
        Self {
          #ident: #absent,
          ..self
        }
      }
    }
  });

  quote! {
    #with_method
    #without_method
  }
}
