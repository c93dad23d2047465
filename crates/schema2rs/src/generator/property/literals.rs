use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};
use serde_json::Value;

use crate::generator::property::contract::support;

pub(crate) fn int_literal(value: i64) -> TokenStream {
  if value < 0 {
    let magnitude = Literal::u64_unsuffixed(value.unsigned_abs());
    quote! { -#magnitude }
  } else {
    Literal::i64_unsuffixed(value).into_token_stream()
  }
}

/// Integer literal with an explicit `i64` suffix, for positions without type inference.
pub(crate) fn typed_int_literal(value: i64) -> TokenStream {
  if value == i64::MIN {
    return quote! { i64::MIN };
  }
  let magnitude = Literal::i64_suffixed(value.abs());
  if value < 0 {
    quote! { -#magnitude }
  } else {
    magnitude.into_token_stream()
  }
}

pub(crate) fn float_literal(value: f64) -> TokenStream {
  let magnitude = Literal::f64_unsuffixed(value.abs());
  if value.is_sign_negative() {
    quote! { -#magnitude }
  } else {
    quote! { #magnitude }
  }
}

/// Tokens `serde_json::json!` accepts for `value`.
pub(crate) fn json_tokens(value: &Value) -> TokenStream {
  match value {
    Value::Null => quote! { null },
    Value::Bool(flag) => quote! { #flag },
    Value::Number(number) => {
      if let Some(integer) = number.as_i64() {
        int_literal(integer)
      } else if let Some(unsigned) = number.as_u64() {
        Literal::u64_unsuffixed(unsigned).into_token_stream()
      } else {
        float_literal(number.as_f64().unwrap_or_default())
      }
    }
    Value::String(text) => quote! { #text },
    Value::Array(items) => {
      let items = items.iter().map(json_tokens);
      quote! { [#(#items),*] }
    }
    Value::Object(entries) => {
      let entries = entries.iter().map(|(key, value)| {
        let value = json_tokens(value);
        quote! { #key: #value }
      });
      quote! { { #(#entries),* } }
    }
  }
}

/// `serde_json::json!` invocation rebuilding `value` at runtime.
pub(crate) fn json_literal(value: &Value) -> TokenStream {
  let support = support();
  let tokens = json_tokens(value);
  quote! { #support::serde_json::json!(#tokens) }
}
