use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::quote;
use serde_json::Value;

use crate::generator::property::{
  Container, MintedType, Property, PropertyContract, ScalarKind,
  contract::{deref, json_value, plain_accessor, receiver, support},
  decorators::{optional_accessor, optional_clone_expression, optional_output_mapping, with_null_marker},
  literals::{float_literal, int_literal, json_literal},
};

impl ScalarKind {
  pub fn annotation(self) -> &'static str {
    match self {
      Self::Bool => "boolean",
      Self::Integer => "integer",
      Self::Number => "integer | float",
      Self::String => "string",
      Self::DateTime => "date-time",
    }
  }

  fn storage_type(self) -> TokenStream {
    let support = support();
    match self {
      Self::Bool => quote! { bool },
      Self::Integer => quote! { i64 },
      Self::Number => quote! { #support::Number },
      Self::String => quote! { String },
      Self::DateTime => quote! { #support::DateTime },
    }
  }

  fn input_assertion(self, raw: &TokenStream) -> TokenStream {
    let support = support();
    match self {
      Self::Bool => quote! { (#raw).is_boolean() },
      Self::Integer => quote! { #support::decode::is_integer(#raw) },
      Self::Number => quote! { (#raw).is_number() },
      Self::String => quote! { (#raw).is_string() },
      Self::DateTime => quote! { #support::decode::is_date_time(#raw) },
    }
  }

  fn input_mapping(self, raw: &TokenStream) -> TokenStream {
    let support = support();
    match self {
      Self::Bool => quote! { #support::decode::boolean(#raw)? },
      Self::Integer => quote! { #support::decode::integer(#raw)? },
      Self::Number => quote! { #support::decode::number(#raw)? },
      Self::String => quote! { #support::decode::string(#raw)? },
      Self::DateTime => quote! { #support::decode::date_time(#raw)? },
    }
  }

  fn output_mapping(self, value: &TokenStream) -> TokenStream {
    let support = support();
    match self {
      Self::Bool => {
        let flag = deref(value);
        quote! { #support::serde_json::Value::Bool(#flag) }
      }
      Self::Integer => {
        let integer = deref(value);
        quote! { #support::serde_json::Value::from(#integer) }
      }
      Self::Number => {
        let number = receiver(value);
        quote! { #number.to_json() }
      }
      Self::String => {
        let text = receiver(value);
        quote! { #support::serde_json::Value::String(#text.clone()) }
      }
      Self::DateTime => quote! { #support::encode::date_time(#value) },
    }
  }

  fn literal_expression(self, literal: &Value) -> Option<TokenStream> {
    let support = support();
    match self {
      Self::Bool => literal.as_bool().map(|flag| quote! { #flag }),
      Self::Integer => literal.as_i64().map(int_literal),
      Self::Number => {
        let Value::Number(number) = literal else {
          return None;
        };
        let text = number.to_string();
        match number.as_i64() {
          Some(integer) if !text.contains(['.', 'e', 'E']) => {
            let integer = int_literal(integer);
            Some(quote! { #support::Number::Integer(#integer) })
          }
          _ => number.as_f64().map(|float| {
            let float = float_literal(float);
            quote! { #support::Number::Float(#float) }
          }),
        }
      }
      Self::String => literal.as_str().map(|text| quote! { #text.to_owned() }),
      Self::DateTime => None,
    }
  }
}

impl Container {
  fn wrap_annotation(self, item: &str) -> String {
    match self {
      Self::List => format!("array<{item}>"),
      Self::Map => format!("map<{item}>"),
    }
  }
}

fn collection_storage(container: Container, item: &Property) -> TokenStream {
  let support = support();
  let item_type = item.field_type();
  match container {
    Container::List => quote! { Vec<#item_type> },
    Container::Map => quote! { #support::Map<#item_type> },
  }
}

fn collection_input_assertion(container: Container, item: &Property, raw: &TokenStream) -> TokenStream {
  let check = item.input_assertion(&quote! { item });
  match container {
    Container::List => quote! { (#raw).as_array().is_some_and(|items| items.iter().all(|item| #check)) },
    Container::Map => quote! { (#raw).as_object().is_some_and(|entries| entries.values().all(|item| #check)) },
  }
}

fn collection_input_mapping(container: Container, item: &Property, raw: &TokenStream) -> TokenStream {
  let support = support();
  let mapping = item.input_mapping(&quote! { item });
  match container {
    Container::List => quote! {
      #support::decode::array(#raw)?
        .iter()
        .map(|item| -> Result<_, #support::ValidationError> { Ok(#mapping) })
        .collect::<Result<Vec<_>, _>>()?
    },
    Container::Map => quote! {
      #support::decode::object(#raw)?
        .iter()
        .map(|(key, item)| -> Result<_, #support::ValidationError> { Ok((key.clone(), #mapping)) })
        .collect::<Result<#support::Map<_>, _>>()?
    },
  }
}

fn collection_output_mapping(container: Container, item: &Property, value: &TokenStream) -> TokenStream {
  let support = support();
  let output = item.output_mapping(&quote! { item });
  match container {
    Container::List => quote! { #support::encode::list(#value, |item| #output) },
    Container::Map => quote! { #support::encode::map(#value, |item| #output) },
  }
}

fn collection_literal(container: Container, item: &Property, literal: &Value) -> Option<TokenStream> {
  let support = support();
  match (container, literal) {
    (Container::List, Value::Array(values)) => {
      let items = values
        .iter()
        .map(|value| item.literal_expression(value))
        .collect::<Option<Vec<_>>>()?;
      Some(quote! { vec![#(#items),*] })
    }
    (Container::Map, Value::Object(entries)) => {
      let entries = entries
        .iter()
        .map(|(key, value)| {
          item
            .literal_expression(value)
            .map(|value| quote! { (#key.to_owned(), #value) })
        })
        .collect::<Option<Vec<_>>>()?;
      Some(quote! { #support::Map::from_iter([#(#entries),*]) })
    }
    _ => None,
  }
}

/// Runtime check of a value against `properties[key]` of the enclosing struct's schema.
fn validated(property: &Property, value: &TokenStream, key: &str) -> TokenStream {
  let support = support();
  let output = property.output_mapping(value);
  quote! { #support::validate_property(Self::SCHEMA, #key, &#output)?; }
}

impl PropertyContract for Property {
  fn type_annotation(&self) -> String {
    match self {
      Self::Scalar(kind) => kind.annotation().to_string(),
      Self::PrimitiveArray { container, item }
      | Self::ObjectArray { container, item }
      | Self::ReferenceArray { container, item } => container.wrap_annotation(&item.type_annotation()),
      Self::NestedObject(request) | Self::Intersection(request) => request.type_name().to_string(),
      Self::Reference(referenced) => referenced.annotation(),
      Self::Union(union) => union
        .alternatives
        .iter()
        .map(|alternative| alternative.property.type_annotation())
        .join(" | "),
      Self::Enum(target) => target.path.name().to_string(),
      Self::Dynamic(dynamic) => Container::Map.wrap_annotation(dynamic.entry.name().as_str()),
      Self::Nullable(inner) => with_null_marker(&inner.type_annotation()),
      Self::Mixed => "mixed".to_string(),
    }
  }

  fn storage_type(&self) -> Option<TokenStream> {
    let support = support();
    match self {
      Self::Scalar(kind) => Some(kind.storage_type()),
      Self::PrimitiveArray { container, item }
      | Self::ObjectArray { container, item }
      | Self::ReferenceArray { container, item } => Some(collection_storage(*container, item)),
      Self::NestedObject(request) | Self::Intersection(request) => {
        let path = request.type_path();
        Some(quote! { #path })
      }
      Self::Reference(referenced) => referenced.storage_type(),
      Self::Union(union) => {
        let path = &union.path;
        Some(quote! { #path })
      }
      Self::Enum(target) => {
        let path = &target.path;
        Some(quote! { #path })
      }
      Self::Dynamic(dynamic) => {
        let entry = &dynamic.entry;
        Some(quote! { #support::Map<#entry> })
      }
      Self::Nullable(inner) => inner.storage_type().map(|inner| quote! { Option<#inner> }),
      Self::Mixed => None,
    }
  }

  fn is_boxed(&self) -> bool {
    matches!(self, Self::Reference(referenced) if referenced.is_boxed())
  }

  fn view_type(&self) -> TokenStream {
    match self {
      Self::Reference(referenced) => referenced.view_type().unwrap_or_else(json_value),
      Self::Nullable(inner) => {
        let inner = inner.view_type();
        quote! { Option<#inner> }
      }
      other => other.field_type(),
    }
  }

  fn assertion(&self, value: &TokenStream, key: &str) -> Option<TokenStream> {
    self.is_scalar_like().then(|| validated(self, value, key))
  }

  fn input_assertion(&self, raw: &TokenStream) -> TokenStream {
    match self {
      Self::Scalar(kind) => kind.input_assertion(raw),
      Self::PrimitiveArray { container, item }
      | Self::ObjectArray { container, item }
      | Self::ReferenceArray { container, item } => collection_input_assertion(*container, item, raw),
      Self::NestedObject(request) | Self::Intersection(request) => {
        let path = request.type_path();
        quote! { #path::validate_input(#raw).is_ok() }
      }
      Self::Reference(referenced) => referenced.input_assertion(raw),
      Self::Union(union) => {
        let path = &union.path;
        quote! { #path::matches_input(#raw) }
      }
      Self::Enum(target) => {
        let path = &target.path;
        quote! { #path::try_from_json(#raw).is_some() }
      }
      Self::Dynamic(_) => quote! { (#raw).is_object() },
      Self::Nullable(inner) => {
        let check = inner.input_assertion(raw);
        quote! { ((#raw).is_null() || #check) }
      }
      Self::Mixed => quote! { true },
    }
  }

  fn input_mapping(&self, raw: &TokenStream) -> TokenStream {
    let support = support();
    match self {
      Self::Scalar(kind) => kind.input_mapping(raw),
      Self::PrimitiveArray { container, item }
      | Self::ObjectArray { container, item }
      | Self::ReferenceArray { container, item } => collection_input_mapping(*container, item, raw),
      Self::NestedObject(request) | Self::Intersection(request) => {
        let path = request.type_path();
        quote! { #path::build_from_input(#raw, validate)? }
      }
      Self::Reference(referenced) => referenced.input_mapping(raw),
      Self::Union(union) => {
        let path = &union.path;
        quote! { #path::build_from_input(#raw, validate)? }
      }
      Self::Enum(target) => {
        let path = &target.path;
        quote! { #path::from_json(#raw)? }
      }
      Self::Dynamic(dynamic) => {
        let entry = &dynamic.entry;
        quote! {
          #support::decode::object(#raw)?
            .iter()
            .map(|(key, item)| -> Result<_, #support::ValidationError> {
              Ok((key.clone(), #entry::build_from_entry(key, item, validate)?))
            })
            .collect::<Result<#support::Map<_>, _>>()?
        }
      }
      Self::Nullable(inner) => {
        let mapping = inner.input_mapping(&quote! { raw });
        quote! {
          match #raw {
            raw if raw.is_null() => None,
            raw => Some(#mapping),
          }
        }
      }
      Self::Mixed => quote! { (#raw).clone() },
    }
  }

  fn output_mapping(&self, value: &TokenStream) -> TokenStream {
    let support = support();
    match self {
      Self::Scalar(kind) => kind.output_mapping(value),
      Self::PrimitiveArray { container, item }
      | Self::ObjectArray { container, item }
      | Self::ReferenceArray { container, item } => collection_output_mapping(*container, item, value),
      Self::NestedObject(_) | Self::Intersection(_) | Self::Union(_) | Self::Enum(_) => {
        let value = receiver(value);
        quote! { #value.to_json() }
      }
      Self::Reference(referenced) => referenced.output_mapping(value),
      Self::Dynamic(_) => quote! { #support::encode::map(#value, |item| item.to_json()) },
      Self::Nullable(inner) => optional_output_mapping(inner, value),
      Self::Mixed => {
        let value = receiver(value);
        quote! { #value.clone() }
      }
    }
  }

  fn clone_expression(&self, value: &TokenStream) -> Option<TokenStream> {
    let cloned = {
      let value = receiver(value);
      quote! { #value.clone() }
    };
    match self {
      Self::Scalar(ScalarKind::String) => Some(cloned),
      Self::Scalar(_) | Self::Enum(_) => None,
      Self::Reference(referenced) => referenced.clone_expression(value),
      Self::Nullable(inner) => optional_clone_expression(inner, value),
      Self::PrimitiveArray { .. }
      | Self::ObjectArray { .. }
      | Self::ReferenceArray { .. }
      | Self::NestedObject(_)
      | Self::Intersection(_)
      | Self::Union(_)
      | Self::Dynamic(_)
      | Self::Mixed => Some(cloned),
    }
  }

  fn literal_expression(&self, literal: &Value) -> Option<TokenStream> {
    match self {
      Self::Scalar(kind) => kind.literal_expression(literal),
      Self::PrimitiveArray { container, item } | Self::ReferenceArray { container, item } => {
        collection_literal(*container, item, literal)
      }
      Self::Reference(referenced) => referenced.literal_expression(literal),
      Self::Enum(target) => target.definition.case_for(literal).map(|case| {
        let path = &target.path;
        let ident = &case.ident;
        quote! { #path::#ident }
      }),
      Self::Nullable(_) if literal.is_null() => Some(quote! { None }),
      Self::Nullable(inner) => inner
        .literal_expression(literal)
        .map(|expression| quote! { Some(#expression) }),
      Self::Mixed => Some(json_literal(literal)),
      Self::ObjectArray { .. } | Self::NestedObject(_) | Self::Intersection(_) | Self::Union(_) | Self::Dynamic(_) => {
        None
      }
    }
  }

  fn minted_types(&self) -> Vec<MintedType> {
    match self {
      Self::PrimitiveArray { item, .. }
      | Self::ObjectArray { item, .. }
      | Self::ReferenceArray { item, .. }
      | Self::Nullable(item) => item.minted_types(),
      Self::NestedObject(request) | Self::Intersection(request) => vec![MintedType::Class(request.clone())],
      Self::Union(union) => vec![MintedType::Union(union.clone())],
      Self::Enum(target) => vec![MintedType::Enum(target.clone())],
      Self::Dynamic(dynamic) => vec![MintedType::Dynamic(dynamic.clone())],
      Self::Scalar(_) | Self::Reference(_) | Self::Mixed => Vec::new(),
    }
  }

  fn wrap_present(&self, value: &TokenStream) -> TokenStream {
    match self {
      Self::Nullable(inner) if inner.is_boxed() => quote! { (#value).map(Box::new) },
      Self::Reference(referenced) if referenced.is_boxed() => quote! { Box::new(#value) },
      _ => value.clone(),
    }
  }

  fn accessor(&self, field: &TokenStream) -> (TokenStream, TokenStream) {
    match self {
      Self::Nullable(inner) => optional_accessor(inner, field),
      other => plain_accessor(other, field),
    }
  }
}
