//! Resolution of a single schema node into a [`Property`] and the expressions generated code
//! uses to move its value between decoded JSON and the in-memory representation.

pub mod contract;
pub mod decorators;
mod dynamic;
pub mod enums;
pub mod intersection;
mod kinds;
pub(crate) mod literals;
pub mod resolver;
mod union;

#[cfg(test)]
mod tests;

pub use contract::PropertyContract;
pub use decorators::FieldProperty;
pub use enums::{EnumBacking, EnumDefinition};
pub use resolver::PropertyResolver;

use crate::generator::{
  ast::{Documentation, TypePath, TypeToken},
  reference::ReferencedType,
  request::GeneratorRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
  Bool,
  Integer,
  Number,
  String,
  DateTime,
}

/// Storage shape of array-like properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
  /// `type: array` → `Vec<T>`
  List,
  /// object with a schema-valued `additionalProperties` → `Map<T>`
  Map,
}

/// Kind of a resolved property. Closed set; the resolver picks exactly one per node.
#[derive(Debug, Clone)]
pub enum Property {
  Scalar(ScalarKind),
  /// Array or map whose items are scalars, enums, unions, nested collections or untyped.
  PrimitiveArray { container: Container, item: Box<Property> },
  /// Array or map whose items mint a struct of their own.
  ObjectArray { container: Container, item: Box<Property> },
  NestedObject(GeneratorRequest),
  Reference(ReferencedType),
  ReferenceArray { container: Container, item: Box<Property> },
  Union(UnionProperty),
  /// `allOf`, merged into a single schema carried by the request.
  Intersection(GeneratorRequest),
  Enum(EnumTarget),
  Dynamic(DynamicProperty),
  /// A node that also accepts `null`; decodes `null` as `None`.
  Nullable(Box<Property>),
  Mixed,
}

/// Enum minted for an inline `enum` keyword.
#[derive(Debug, Clone)]
pub struct EnumTarget {
  pub path: TypePath,
  pub definition: EnumDefinition,
  pub docs: Documentation,
}

#[derive(Debug, Clone)]
pub struct UnionAlternative {
  pub variant: TypeToken,
  pub property: Property,
}

/// A `oneOf`/`anyOf` that did not collapse into a scalar.
#[derive(Debug, Clone)]
pub struct UnionProperty {
  pub path: TypePath,
  pub alternatives: Vec<UnionAlternative>,
  pub docs: Documentation,
}

#[derive(Debug, Clone)]
pub struct DynamicBranch {
  pub variant: TypeToken,
  /// `None` for the `additionalProperties` catch-all.
  pub pattern: Option<String>,
  pub property: Property,
}

/// An object keyed by `patternProperties`, stored as a map of generated entry enums.
#[derive(Debug, Clone)]
pub struct DynamicProperty {
  pub entry: TypePath,
  pub branches: Vec<DynamicBranch>,
}

impl DynamicProperty {
  pub fn patterns(&self) -> impl Iterator<Item = &DynamicBranch> {
    self.branches.iter().filter(|branch| branch.pattern.is_some())
  }

  pub fn catch_all(&self) -> Option<&DynamicBranch> {
    self.branches.iter().find(|branch| branch.pattern.is_none())
  }
}

/// A type a property needs realized before its parent can be assembled.
#[derive(Debug, Clone)]
pub enum MintedType {
  Class(GeneratorRequest),
  Enum(EnumTarget),
  Union(UnionProperty),
  Dynamic(DynamicProperty),
}

impl Property {
  /// Scalars, untyped values and collections of them: properties whose in-memory value can be
  /// checked against the property schema without knowing any generated type.
  pub fn is_scalar_like(&self) -> bool {
    match self {
      Self::Scalar(_) | Self::Mixed => true,
      Self::PrimitiveArray { item, .. } | Self::Nullable(item) => item.is_scalar_like(),
      _ => false,
    }
  }

  /// Wraps the property so it also holds `null`. Untyped values hold it already.
  #[must_use]
  pub fn nullable(self) -> Self {
    if matches!(self, Self::Nullable(_)) || self.storage_type().is_none() {
      self
    } else {
      Self::Nullable(Box::new(self))
    }
  }

  pub fn scalar_kind(&self) -> Option<ScalarKind> {
    match self {
      Self::Scalar(kind) => Some(*kind),
      _ => None,
    }
  }
}
