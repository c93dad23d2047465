//! Assembled units handed to hooks and rendered by `codegen`.
//!
//! Core parts of a unit are fixed once assembled; hooks can only add derives, attributes,
//! methods and items. Field and variant expressions follow fixed conventions so codegen can
//! splice them into method bodies:
//!
//! * `decode` reads from `object: &serde_json::Map<String, Value>` with `validate: bool` in
//!   scope and may use `?` with `ValidationError`.
//! * `encode` is a statement inserting into `output: serde_json::Map<String, Value>`.
//! * `clone` and `accessor_body` read the field through `self`.
//! * `assertion` and `assign` read the mutator parameter, named after the field.

mod documentation;
pub mod tokens;


use std::path::PathBuf;

pub use documentation::Documentation;
use proc_macro2::TokenStream;
use serde_json::Value;
pub use tokens::{FieldToken, TypePath, TypeToken};

use crate::generator::property::EnumBacking;

#[derive(Debug, Clone, bon::Builder)]
pub struct FieldUnit {
  pub key: String,
  pub ident: FieldToken,
  #[builder(default)]
  pub docs: Documentation,
  pub annotation: String,
  pub field_type: TokenStream,
  pub mutator_type: TokenStream,
  pub accessor_type: TokenStream,
  pub accessor_body: TokenStream,
  pub decode: TokenStream,
  pub encode: TokenStream,
  pub clone: TokenStream,
  pub assertion: Option<TokenStream>,
  pub assign: TokenStream,
  /// Value of the field when its key is absent; `None` for required fields.
  pub absent: Option<TokenStream>,
}

impl FieldUnit {
  pub fn is_required(&self) -> bool {
    self.absent.is_none()
  }
}

/// Members hooks may append to any unit.
#[derive(Debug, Clone, Default)]
pub struct Extensions {
  derives: Vec<TokenStream>,
  attributes: Vec<TokenStream>,
  methods: Vec<TokenStream>,
  items: Vec<TokenStream>,
}

impl Extensions {
  pub fn derives(&self) -> &[TokenStream] {
    &self.derives
  }

  pub fn attributes(&self) -> &[TokenStream] {
    &self.attributes
  }

  pub fn methods(&self) -> &[TokenStream] {
    &self.methods
  }

  pub fn items(&self) -> &[TokenStream] {
    &self.items
  }
}

macro_rules! extensible {
  ($unit:ty) => {
    impl $unit {
      pub fn extensions(&self) -> &Extensions {
        &self.extensions
      }

      /// Adds a trait to the `#[derive(...)]` list.
      pub fn add_derive(&mut self, derive: TokenStream) {
        self.extensions.derives.push(derive);
      }

      /// Adds an outer attribute, written as the full `#[...]`.
      pub fn add_attribute(&mut self, attribute: TokenStream) {
        self.extensions.attributes.push(attribute);
      }

      /// Adds a method to the inherent `impl` block.
      pub fn add_method(&mut self, method: TokenStream) {
        self.extensions.methods.push(method);
      }

      /// Adds an item (usually a trait impl) after the type.
      pub fn add_item(&mut self, item: TokenStream) {
        self.extensions.items.push(item);
      }
    }
  };
}

#[derive(Debug, Clone, bon::Builder)]
pub struct ClassUnit {
  path: TypePath,
  #[builder(default)]
  docs: Documentation,
  /// JSON text of the node schema, embedded as `SCHEMA` for runtime validation.
  schema: String,
  #[builder(default)]
  fields: Vec<FieldUnit>,
  #[builder(skip)]
  extensions: Extensions,
}

impl ClassUnit {
  pub fn name(&self) -> &TypeToken {
    self.path.name()
  }

  pub fn path(&self) -> &TypePath {
    &self.path
  }

  pub fn docs(&self) -> &Documentation {
    &self.docs
  }

  pub fn schema(&self) -> &str {
    &self.schema
  }

  pub fn fields(&self) -> &[FieldUnit] {
    &self.fields
  }
}

extensible!(ClassUnit);

#[derive(Debug, Clone, PartialEq)]
pub struct EnumCaseUnit {
  pub ident: TypeToken,
  pub literal: Value,
}

#[derive(Debug, Clone, bon::Builder)]
pub struct EnumUnit {
  path: TypePath,
  #[builder(default)]
  docs: Documentation,
  backing: EnumBacking,
  cases: Vec<EnumCaseUnit>,
  #[builder(skip)]
  extensions: Extensions,
}

impl EnumUnit {
  pub fn name(&self) -> &TypeToken {
    self.path.name()
  }

  pub fn path(&self) -> &TypePath {
    &self.path
  }

  pub fn docs(&self) -> &Documentation {
    &self.docs
  }

  pub fn backing(&self) -> EnumBacking {
    self.backing
  }

  pub fn cases(&self) -> &[EnumCaseUnit] {
    &self.cases
  }
}

extensible!(EnumUnit);

/// How a union-like enum picks its variant while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
  /// First variant whose `condition` accepts `input` wins.
  Alternatives,
  /// First variant whose `condition` accepts the map `key` wins.
  Entries,
}

#[derive(Debug, Clone)]
pub struct VariantUnit {
  pub ident: TypeToken,
  pub storage: TokenStream,
  /// `bool` expression over `input: &Value` (alternatives) or `key: &str` (entries).
  pub condition: TokenStream,
  /// Decodes `input: &Value` with `validate` in scope.
  pub decode: TokenStream,
  /// Encodes `value: &Storage`.
  pub encode: TokenStream,
}

/// Generated enum holding the value of a `oneOf`/`anyOf` property or one entry of a dynamic map.
#[derive(Debug, Clone, bon::Builder)]
pub struct UnionUnit {
  path: TypePath,
  #[builder(default)]
  docs: Documentation,
  dispatch: Dispatch,
  variants: Vec<VariantUnit>,
  /// Variant used when no condition matches; decoded values otherwise fall through to
  /// `Unmatched(Value)`.
  fallback: Option<VariantUnit>,
  #[builder(skip)]
  extensions: Extensions,
}

impl UnionUnit {
  pub fn name(&self) -> &TypeToken {
    self.path.name()
  }

  pub fn path(&self) -> &TypePath {
    &self.path
  }

  pub fn docs(&self) -> &Documentation {
    &self.docs
  }

  pub fn dispatch(&self) -> Dispatch {
    self.dispatch
  }

  pub fn variants(&self) -> &[VariantUnit] {
    &self.variants
  }

  pub fn fallback(&self) -> Option<&VariantUnit> {
    self.fallback.as_ref()
  }
}

extensible!(UnionUnit);

#[derive(Debug, Clone)]
pub enum TypeUnit {
  Class(ClassUnit),
  Enum(EnumUnit),
  Union(UnionUnit),
}

impl TypeUnit {
  pub fn path(&self) -> &TypePath {
    match self {
      Self::Class(unit) => unit.path(),
      Self::Enum(unit) => unit.path(),
      Self::Union(unit) => unit.path(),
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      Self::Class(_) => "struct",
      Self::Enum(_) => "enum",
      Self::Union(unit) if unit.dispatch() == Dispatch::Entries => "entry",
      Self::Union(_) => "union",
    }
  }
}

/// One emitted source file: the types of a namespace plus declarations of its child modules.
#[derive(Debug, Clone, bon::Builder)]
pub struct FileUnit {
  /// Path relative to the output directory.
  path: PathBuf,
  #[builder(default)]
  namespace: Vec<String>,
  #[builder(default)]
  submodules: Vec<String>,
  #[builder(default)]
  types: Vec<TypeUnit>,
  #[builder(skip)]
  items: Vec<TokenStream>,
}

impl FileUnit {
  pub fn path(&self) -> &PathBuf {
    &self.path
  }

  pub fn namespace(&self) -> &[String] {
    &self.namespace
  }

  pub fn submodules(&self) -> &[String] {
    &self.submodules
  }

  pub fn types(&self) -> &[TypeUnit] {
    &self.types
  }

  pub fn items(&self) -> &[TokenStream] {
    &self.items
  }

  /// Adds a free item (function, constant, `use`) after the file's types.
  pub fn add_item(&mut self, item: TokenStream) {
    self.items.push(item);
  }
}
