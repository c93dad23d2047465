use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use serde_json::Value;
use syn::{Expr, Ident};

use crate::generator::property::MintedType;

/// Path of the runtime crate generated code links against.
pub(crate) fn support() -> TokenStream {
  quote! { ::schema2rs_support }
}

pub(crate) fn json_value() -> TokenStream {
  let support = support();
  quote! { #support::serde_json::Value }
}

/// The place `value` borrows when it is written `&place`.
fn borrowed_place(value: &TokenStream) -> Option<Expr> {
  match syn::parse2::<Expr>(value.clone()) {
    Ok(Expr::Reference(reference)) if reference.mutability.is_none() => Some(*reference.expr),
    _ => None,
  }
}

/// Value behind the reference `value`: `&self.limit` becomes `self.limit`, anything else `*value`.
pub(crate) fn deref(value: &TokenStream) -> TokenStream {
  match borrowed_place(value) {
    Some(place) => place.into_token_stream(),
    None => quote! { *#value },
  }
}

/// `value` in method receiver position. Borrows are dropped since auto-ref restores them;
/// paths and field accesses are used as they are, other expressions get parenthesized.
pub(crate) fn receiver(value: &TokenStream) -> TokenStream {
  if let Some(place) = borrowed_place(value) {
    return place.into_token_stream();
  }
  match syn::parse2::<Expr>(value.clone()) {
    Ok(Expr::Path(_) | Expr::Field(_)) => value.clone(),
    _ => quote! { (#value) },
  }
}

/// Expressions a property contributes to its class.
///
/// Token parameters are expressions: `raw` evaluates to `&serde_json::Value`, `value` to a
/// reference to the in-memory value. Input mappings may use `?` with
/// `schema2rs_support::ValidationError` and expect `validate: bool` in scope.
pub trait PropertyContract {
  /// Human-readable type shown in generated docs.
  fn type_annotation(&self) -> String;

  /// Concrete Rust type, or `None` when nothing more precise than a JSON value is known.
  fn storage_type(&self) -> Option<TokenStream>;

  fn field_type(&self) -> TokenStream {
    self.storage_type().unwrap_or_else(json_value)
  }

  /// Stored behind a `Box` to break a reference cycle.
  fn is_boxed(&self) -> bool {
    false
  }

  /// Type accessors hand out and mutators take; the field type without the `Box`.
  fn view_type(&self) -> TokenStream {
    self.field_type()
  }

  /// Statement validating an in-memory value before a mutator stores it, if the static type
  /// alone does not guarantee the schema.
  fn assertion(&self, value: &TokenStream, key: &str) -> Option<TokenStream>;

  /// `bool` expression telling whether `raw` can be decoded as this property.
  fn input_assertion(&self, raw: &TokenStream) -> TokenStream;

  fn input_mapping(&self, raw: &TokenStream) -> TokenStream;

  fn output_mapping(&self, value: &TokenStream) -> TokenStream;

  /// Deep copy of `value`; `None` when the type is `Copy`.
  fn clone_expression(&self, value: &TokenStream) -> Option<TokenStream>;

  /// Renders a schema `default` as a Rust expression of the field type.
  fn literal_expression(&self, literal: &Value) -> Option<TokenStream>;

  fn minted_types(&self) -> Vec<MintedType>;

  /// Raw value of `key` in `object`. Decorated properties receive an `Option<&Value>`.
  fn raw_input(&self, object: &TokenStream, key: &str) -> TokenStream {
    let support = support();
    quote! { #support::decode::required(#object, #key)? }
  }

  fn encode_statement(&self, output: &Ident, key: &str, value: &TokenStream) -> TokenStream {
    let encoded = self.output_mapping(value);
    quote! { #output.insert(#key.to_owned(), #encoded); }
  }

  /// Parameter type of the `with_*` mutator.
  fn mutator_type(&self) -> TokenStream {
    self.view_type()
  }

  /// Converts the mutator parameter into the stored field value.
  fn wrap_present(&self, value: &TokenStream) -> TokenStream {
    if self.is_boxed() {
      quote! { Box::new(#value) }
    } else {
      value.clone()
    }
  }

  /// Field value when the key is absent. Required properties have none.
  fn absent_value(&self) -> Option<TokenStream> {
    None
  }

  /// Return type and body of the accessor for the field expression `field` (e.g. `self.name`).
  fn accessor(&self, field: &TokenStream) -> (TokenStream, TokenStream) {
    plain_accessor(self, field)
  }
}

/// `Copy` values are returned as they are, anything else by reference to its view type.
pub(crate) fn plain_accessor<C: PropertyContract + ?Sized>(contract: &C, field: &TokenStream) -> (TokenStream, TokenStream) {
  if contract.clone_expression(field).is_none() {
    (contract.field_type(), field.clone())
  } else {
    let view_type = contract.view_type();
    (quote! { &#view_type }, quote! { &#field })
  }
}
