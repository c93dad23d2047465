use proc_macro2::TokenStream;
use quote::quote;
use serde_json::Value;
use syn::Ident;

use crate::generator::property::{
  MintedType, Property, PropertyContract,
  contract::{receiver, support},
};

const NULL_MARKER: &str = " | null";

/// Appends the nullable marker to an annotation unless it already ends with it.
pub(crate) fn with_null_marker(annotation: &str) -> String {
  if annotation.ends_with(NULL_MARKER) {
    annotation.to_string()
  } else {
    format!("{annotation}{NULL_MARKER}")
  }
}

/// A property that may be absent from the decoded object.
#[derive(Debug, Clone)]
pub struct Optional {
  inner: Property,
  ignored_default: Option<Value>,
  /// An explicit `null` decodes as absent.
  accepts_null: bool,
}

/// A property that falls back to its schema `default` when absent.
#[derive(Debug, Clone)]
pub struct Defaulted {
  inner: Property,
  default_expression: TokenStream,
  nullable: bool,
  /// An explicit `null` decodes as `None` and `None` encodes as `null`. Implies `nullable`.
  accepts_null: bool,
}

/// A resolved property together with its presence policy.
#[derive(Debug, Clone)]
pub enum FieldProperty {
  Required(Property),
  Optional(Optional),
  Defaulted(Defaulted),
}

impl FieldProperty {
  /// Required properties stay plain, others become `Defaulted` when their `default` can be
  /// rendered and `Optional` otherwise.
  ///
  /// A nullable property that may be absent is unwrapped: `null` and absence both become
  /// `None`, so the field is never an `Option<Option<T>>`.
  pub fn decorate(inner: Property, is_required: bool, default: Option<&Value>, nullable_defaults: bool) -> Self {
    if is_required {
      return Self::Required(inner);
    }

    let (inner, accepts_null) = match inner {
      Property::Nullable(inner) => (*inner, true),
      other => (other, false),
    };

    let Some(literal) = default.filter(|literal| !(accepts_null && literal.is_null())) else {
      return Self::Optional(Optional::new(inner, accepts_null));
    };

    match inner.literal_expression(literal) {
      Some(default_expression) => Self::Defaulted(Defaulted {
        inner,
        default_expression,
        nullable: nullable_defaults || accepts_null,
        accepts_null,
      }),
      None => Self::Optional(Optional {
        inner,
        ignored_default: Some(literal.clone()),
        accepts_null,
      }),
    }
  }

  pub fn contract(&self) -> &dyn PropertyContract {
    match self {
      Self::Required(inner) => inner,
      Self::Optional(optional) => optional,
      Self::Defaulted(defaulted) => defaulted,
    }
  }

  /// A `default` that could not be rendered for the property type and was dropped.
  pub fn ignored_default(&self) -> Option<&Value> {
    match self {
      Self::Optional(optional) => optional.ignored_default.as_ref(),
      Self::Required(_) | Self::Defaulted(_) => None,
    }
  }
}

impl Optional {
  fn new(inner: Property, accepts_null: bool) -> Self {
    Self {
      inner,
      ignored_default: None,
      accepts_null,
    }
  }
}

impl Defaulted {
  fn wrap(&self, value: &TokenStream) -> TokenStream {
    if self.nullable {
      quote! { Some(#value) }
    } else {
      value.clone()
    }
  }
}

fn optional_input_assertion(inner: &Property, raw: &TokenStream, accepts_null: bool) -> TokenStream {
  let check = inner.input_assertion(&quote! { raw });
  if accepts_null {
    quote! { (#raw).is_none_or(|raw| raw.is_null() || #check) }
  } else {
    quote! { (#raw).is_none_or(|raw| #check) }
  }
}

pub(super) fn optional_output_mapping(inner: &Property, value: &TokenStream) -> TokenStream {
  let output = inner.output_mapping(&quote! { value });
  let support = support();
  quote! {
    match #value {
      Some(value) => #output,
      None => #support::serde_json::Value::Null,
    }
  }
}

pub(super) fn optional_clone_expression(inner: &Property, value: &TokenStream) -> Option<TokenStream> {
  let value = receiver(value);
  inner
    .clone_expression(&quote! { inner })
    .map(|clone| quote! { #value.as_ref().map(|inner| #clone) })
}

fn optional_encode_statement(inner: &Property, output: &Ident, key: &str, value: &TokenStream) -> TokenStream {
  let encoded = inner.output_mapping(&quote! { value });
  let value = receiver(value);
  quote! {
    if let Some(value) = #value.as_ref() {
      #output.insert(#key.to_owned(), #encoded);
    }
  }
}

pub(super) fn optional_accessor(inner: &Property, field: &TokenStream) -> (TokenStream, TokenStream) {
  let inner_type = inner.field_type();
  if inner.clone_expression(field).is_none() {
    (quote! { Option<#inner_type> }, field.clone())
  } else if inner.is_boxed() {
    let view_type = inner.view_type();
    (quote! { Option<&#view_type> }, quote! { #field.as_deref() })
  } else {
    (quote! { Option<&#inner_type> }, quote! { #field.as_ref() })
  }
}

fn lookup_raw(object: &TokenStream, key: &str) -> TokenStream {
  quote! { #object.get(#key) }
}

impl PropertyContract for Optional {
  fn type_annotation(&self) -> String {
    with_null_marker(&self.inner.type_annotation())
  }

  fn storage_type(&self) -> Option<TokenStream> {
    self.inner.storage_type().map(|inner| quote! { Option<#inner> })
  }

  fn field_type(&self) -> TokenStream {
    let inner = self.inner.field_type();
    quote! { Option<#inner> }
  }

  fn view_type(&self) -> TokenStream {
    let inner = self.inner.view_type();
    quote! { Option<#inner> }
  }

  fn assertion(&self, value: &TokenStream, key: &str) -> Option<TokenStream> {
    self.inner.assertion(value, key)
  }

  fn input_assertion(&self, raw: &TokenStream) -> TokenStream {
    optional_input_assertion(&self.inner, raw, self.accepts_null)
  }

  fn input_mapping(&self, raw: &TokenStream) -> TokenStream {
    let mapping = self.inner.input_mapping(&quote! { raw });
    if self.accepts_null {
      quote! {
        match #raw {
          Some(raw) if !raw.is_null() => Some(#mapping),
          _ => None,
        }
      }
    } else {
      quote! {
        match #raw {
          Some(raw) => Some(#mapping),
          None => None,
        }
      }
    }
  }

  fn output_mapping(&self, value: &TokenStream) -> TokenStream {
    optional_output_mapping(&self.inner, value)
  }

  fn clone_expression(&self, value: &TokenStream) -> Option<TokenStream> {
    optional_clone_expression(&self.inner, value)
  }

  fn literal_expression(&self, literal: &Value) -> Option<TokenStream> {
    self
      .inner
      .literal_expression(literal)
      .map(|expression| quote! { Some(#expression) })
  }

  fn minted_types(&self) -> Vec<MintedType> {
    self.inner.minted_types()
  }

  fn raw_input(&self, object: &TokenStream, key: &str) -> TokenStream {
    lookup_raw(object, key)
  }

  fn encode_statement(&self, output: &Ident, key: &str, value: &TokenStream) -> TokenStream {
    optional_encode_statement(&self.inner, output, key, value)
  }

  fn mutator_type(&self) -> TokenStream {
    self.inner.mutator_type()
  }

  fn wrap_present(&self, value: &TokenStream) -> TokenStream {
    let inner = self.inner.wrap_present(value);
    quote! { Some(#inner) }
  }

  fn absent_value(&self) -> Option<TokenStream> {
    Some(quote! { None })
  }

  fn accessor(&self, field: &TokenStream) -> (TokenStream, TokenStream) {
    optional_accessor(&self.inner, field)
  }
}

impl PropertyContract for Defaulted {
  fn type_annotation(&self) -> String {
    let annotation = self.inner.type_annotation();
    if self.nullable {
      with_null_marker(&annotation)
    } else {
      annotation
    }
  }

  fn storage_type(&self) -> Option<TokenStream> {
    let inner = self.inner.storage_type();
    if self.nullable {
      inner.map(|inner| quote! { Option<#inner> })
    } else {
      inner
    }
  }

  fn field_type(&self) -> TokenStream {
    let inner = self.inner.field_type();
    if self.nullable {
      quote! { Option<#inner> }
    } else {
      inner
    }
  }

  fn is_boxed(&self) -> bool {
    !self.nullable && self.inner.is_boxed()
  }

  fn view_type(&self) -> TokenStream {
    if self.nullable {
      let inner = self.inner.view_type();
      quote! { Option<#inner> }
    } else {
      self.inner.view_type()
    }
  }

  fn assertion(&self, value: &TokenStream, key: &str) -> Option<TokenStream> {
    self.inner.assertion(value, key)
  }

  fn input_assertion(&self, raw: &TokenStream) -> TokenStream {
    optional_input_assertion(&self.inner, raw, self.accepts_null)
  }

  fn input_mapping(&self, raw: &TokenStream) -> TokenStream {
    let present = self.wrap(&self.inner.input_mapping(&quote! { raw }));
    let absent = self.wrap(&self.default_expression);
    let null = self.accepts_null.then(|| quote! { Some(raw) if raw.is_null() => None, });
    quote! {
      match #raw {
        #null
        Some(raw) => #present,
        None => #absent,
      }
    }
  }

  fn output_mapping(&self, value: &TokenStream) -> TokenStream {
    if self.nullable {
      optional_output_mapping(&self.inner, value)
    } else {
      self.inner.output_mapping(value)
    }
  }

  fn clone_expression(&self, value: &TokenStream) -> Option<TokenStream> {
    if self.nullable {
      optional_clone_expression(&self.inner, value)
    } else {
      self.inner.clone_expression(value)
    }
  }

  fn literal_expression(&self, literal: &Value) -> Option<TokenStream> {
    self
      .inner
      .literal_expression(literal)
      .map(|expression| self.wrap(&expression))
  }

  fn minted_types(&self) -> Vec<MintedType> {
    self.inner.minted_types()
  }

  fn raw_input(&self, object: &TokenStream, key: &str) -> TokenStream {
    lookup_raw(object, key)
  }

  fn encode_statement(&self, output: &Ident, key: &str, value: &TokenStream) -> TokenStream {
    if self.nullable && !self.accepts_null {
      optional_encode_statement(&self.inner, output, key, value)
    } else {
      let encoded = self.output_mapping(value);
      quote! { #output.insert(#key.to_owned(), #encoded); }
    }
  }

  fn mutator_type(&self) -> TokenStream {
    self.inner.mutator_type()
  }

  fn wrap_present(&self, value: &TokenStream) -> TokenStream {
    self.wrap(&self.inner.wrap_present(value))
  }

  fn absent_value(&self) -> Option<TokenStream> {
    Some(self.wrap(&self.default_expression))
  }

  fn accessor(&self, field: &TokenStream) -> (TokenStream, TokenStream) {
    if self.nullable {
      optional_accessor(&self.inner, field)
    } else {
      self.inner.accessor(field)
    }
  }
}
