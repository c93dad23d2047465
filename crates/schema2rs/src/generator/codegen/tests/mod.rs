mod enums;

use proc_macro2::TokenStream;

use crate::generator::ast::{TypePath, TypeToken};

pub(super) fn path(name: &str) -> TypePath {
  TypePath::new(&["crate".to_string()], &[], TypeToken::new(name))
}

/// Whether `generated` contains `expected`, comparing the normalized token text.
pub(super) fn contains(generated: &TokenStream, expected: &TokenStream) -> bool {
  generated.to_string().contains(&expected.to_string())
}

pub(super) fn pretty(tokens: TokenStream) -> String {
  prettyplease::unparse(&syn::parse2::<syn::File>(tokens).unwrap())
}
