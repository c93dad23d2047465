use std::fmt::{Display, Formatter};

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, format_ident, quote};
pub use string_cache::DefaultAtom;
use syn::Ident;

use crate::generator::naming::identifiers::{to_rust_field_name, to_rust_module_name};

/// Renders a possibly raw identifier (`r#type`).
pub(crate) fn ident(name: &str) -> Ident {
  match name.strip_prefix("r#") {
    Some(raw) => Ident::new_raw(raw, Span::call_site()),
    None => Ident::new(name, Span::call_site()),
  }
}

/// A generated type name. Callers pass names that are already valid Rust identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeToken(DefaultAtom);

impl TypeToken {
  pub fn new(name: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(name.as_ref()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for TypeToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for TypeToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident(&self.0).to_tokens(tokens);
  }
}

/// A struct field derived from a property key.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldToken(DefaultAtom);

impl FieldToken {
  pub fn from_key(key: &str) -> Self {
    Self(DefaultAtom::from(to_rust_field_name(key)))
  }

  /// Wraps a name that is already a valid field identifier.
  pub fn from_ident(name: &str) -> Self {
    Self(DefaultAtom::from(name))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The field name without a raw identifier prefix.
  pub fn bare(&self) -> &str {
    self.0.strip_prefix("r#").unwrap_or(&self.0)
  }

  /// Method ident built from the field, e.g. `with_name`.
  pub fn method(&self, prefix: &str) -> Ident {
    format_ident!("{prefix}{}", self.bare())
  }
}

impl Display for FieldToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for FieldToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident(&self.0).to_tokens(tokens);
  }
}

/// Absolute path of a generated (or externally supplied) type, e.g. `crate::definitions::Address`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypePath {
  modules: Vec<String>,
  name: TypeToken,
}

impl TypePath {
  /// Joins the output module root with the snake-cased namespace segments.
  pub fn new(module_root: &[String], namespace: &[String], name: TypeToken) -> Self {
    let modules = module_root
      .iter()
      .cloned()
      .chain(namespace.iter().map(|segment| to_rust_module_name(segment)))
      .collect();
    Self { modules, name }
  }

  /// Parses a `::`-separated path supplied by the user. The last segment is the type name.
  pub fn parse(path: &str) -> Option<Self> {
    let mut segments: Vec<&str> = path.split("::").map(str::trim).collect();
    let name = segments.pop().filter(|name| !name.is_empty())?;
    if segments.iter().any(|segment| segment.is_empty()) {
      return None;
    }
    Some(Self {
      modules: segments.into_iter().map(str::to_owned).collect(),
      name: TypeToken::new(name),
    })
  }

  pub fn name(&self) -> &TypeToken {
    &self.name
  }

  pub fn modules(&self) -> &[String] {
    &self.modules
  }
}

impl Display for TypePath {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for module in &self.modules {
      write!(f, "{module}::")?;
    }
    self.name.fmt(f)
  }
}

impl ToTokens for TypePath {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let modules = self.modules.iter().map(|module| ident(module));
    let name = &self.name;
    quote! { #(#modules::)* #name }.to_tokens(tokens);
  }
}
