use serde_json::Value;

use crate::{
  generator::{
    ast::{Documentation, TypePath, TypeToken},
    errors::{GeneratorError, GeneratorResult, ResolutionError},
    naming::{definitions::escape_pointer_token, identifiers::type_name_for},
    property::{
      Container, EnumTarget, FieldProperty, Property, ScalarKind, dynamic, enums::resolve_enum,
      intersection::merge_all_of, union,
    },
    request::GeneratorRequest,
  },
  utils::SchemaExt,
};

/// Kinds the resolver distinguishes, in predicate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
  Reference,
  Intersection,
  Union,
  Enum,
  DateTime,
  String,
  ObjectArray,
  PrimitiveArray,
  Primitive,
  NestedObject,
  Dynamic,
  Mixed,
}

type Predicate = fn(&Value) -> bool;

/// The first predicate accepting a node decides its kind; nodes nothing accepts are `Mixed`.
const PREDICATES: [(PropertyKind, Predicate); 11] = [
  (PropertyKind::Reference, is_reference),
  (PropertyKind::Intersection, is_intersection),
  (PropertyKind::Union, is_union),
  (PropertyKind::Enum, is_enum),
  (PropertyKind::DateTime, is_date_time),
  (PropertyKind::String, is_string),
  (PropertyKind::ObjectArray, is_object_array),
  (PropertyKind::PrimitiveArray, is_primitive_array),
  (PropertyKind::Primitive, is_primitive),
  (PropertyKind::NestedObject, is_nested_object),
  (PropertyKind::Dynamic, is_dynamic),
];

fn is_reference(node: &Value) -> bool {
  node.reference().is_some() || node.collection_items().is_some_and(|(_, items)| items.reference().is_some())
}

fn is_intersection(node: &Value) -> bool {
  node.all_of().is_some()
}

fn is_union(node: &Value) -> bool {
  node.alternatives().is_some()
}

fn is_enum(node: &Value) -> bool {
  node.enum_values().is_some()
}

fn is_date_time(node: &Value) -> bool {
  node.is_date_time()
}

fn is_string(node: &Value) -> bool {
  node.is_type("string")
}

fn is_object_array(node: &Value) -> bool {
  node
    .collection_items()
    .is_some_and(|(_, items)| items.is_class_shaped() || items.all_of().is_some())
}

fn is_primitive_array(node: &Value) -> bool {
  node.collection_items().is_some()
}

fn is_primitive(node: &Value) -> bool {
  matches!(node.schema_type(), Some("boolean" | "integer" | "number"))
}

fn is_nested_object(node: &Value) -> bool {
  node.properties().is_some() || (node.is_type("object") && node.pattern_properties().is_none())
}

fn is_dynamic(node: &Value) -> bool {
  node.pattern_properties().is_some()
}

pub fn classify(node: &Value) -> PropertyKind {
  PREDICATES
    .iter()
    .find(|(_, predicate)| predicate(node))
    .map_or(PropertyKind::Mixed, |(kind, _)| *kind)
}

/// Resolves the properties of the struct a request describes.
pub struct PropertyResolver<'r> {
  request: &'r GeneratorRequest,
}

impl<'r> PropertyResolver<'r> {
  pub fn new(request: &'r GeneratorRequest) -> Self {
    Self { request }
  }

  /// Resolves `properties[key]` and applies the presence policy.
  pub fn resolve(&self, key: &str, node: &Value, is_required: bool) -> GeneratorResult<FieldProperty> {
    let pointer = self.request.child_pointer(&["properties", key]);
    let property = self.resolve_property(key, "", node, &pointer)?;
    Ok(FieldProperty::decorate(
      property,
      is_required,
      node.default_value(),
      self.request.options().treat_defaulted_as_optional,
    ))
  }

  /// Resolves a node without decoration. `suffix` is appended to names of minted types so
  /// items, alternatives and branches of one property get distinct names.
  pub fn resolve_property(&self, key: &str, suffix: &str, node: &Value, pointer: &str) -> GeneratorResult<Property> {
    let kind = classify(node);
    let property = match kind {
      PropertyKind::Reference => self.resolve_reference(node),
      PropertyKind::Intersection => {
        let merged = merge_all_of(node, self.request, pointer)?;
        Property::Intersection(self.mint_class(key, suffix, merged, pointer))
      }
      PropertyKind::Union => union::resolve_union(self, key, suffix, node, pointer)?,
      PropertyKind::Enum => {
        let definition = resolve_enum(node, self.request.options().enums_supported)
          .map_err(|kind| GeneratorError::enumeration(pointer, kind))?;
        Property::Enum(EnumTarget {
          path: self.type_path_for(key, suffix),
          definition,
          docs: Documentation::from_schema(node.title(), node.description()),
        })
      }
      PropertyKind::DateTime => Property::Scalar(ScalarKind::DateTime),
      PropertyKind::String => Property::Scalar(ScalarKind::String),
      PropertyKind::ObjectArray | PropertyKind::PrimitiveArray => {
        let (container, items) = node
          .collection_items()
          .ok_or_else(|| GeneratorError::resolution(pointer, ResolutionError::NotObjectShaped))?;
        let items_pointer = format!("{pointer}/{}", items_keyword(container));
        let item = Box::new(self.resolve_property(key, &format!("{suffix}Item"), items, &items_pointer)?);
        if kind == PropertyKind::ObjectArray {
          Property::ObjectArray { container, item }
        } else {
          Property::PrimitiveArray { container, item }
        }
      }
      PropertyKind::Primitive => Property::Scalar(primitive_kind(node)),
      PropertyKind::NestedObject => Property::NestedObject(self.mint_class(key, suffix, node.clone(), pointer)),
      PropertyKind::Dynamic => dynamic::resolve_dynamic(self, key, suffix, node, pointer)?,
      PropertyKind::Mixed => Property::Mixed,
    };

    if self.accepts_null(node) {
      Ok(property.nullable())
    } else {
      Ok(property)
    }
  }

  fn resolve_reference(&self, node: &Value) -> Property {
    let lookup = self.request.lookup();
    if let Some(reference) = node.reference() {
      return Property::Reference(lookup.lookup_reference(reference));
    }

    match node.collection_items() {
      Some((container, items)) => match items.reference() {
        Some(reference) => {
          let item = Property::Reference(lookup.lookup_reference(reference).unboxed());
          let item = if self.accepts_null(items) { item.nullable() } else { item };
          Property::ReferenceArray {
            container,
            item: Box::new(item),
          }
        }
        None => Property::Mixed,
      },
      None => Property::Mixed,
    }
  }

  /// `null` is a valid value of `node`, either declared on it or on the target of its `$ref`.
  fn accepts_null(&self, node: &Value) -> bool {
    node.is_nullable()
      || node.reference().is_some_and(|reference| {
        self
          .request
          .lookup()
          .lookup_schema(reference)
          .is_some_and(|target| target.is_nullable())
      })
  }

  /// Request for a struct nested under `key`.
  pub(crate) fn mint_class(&self, key: &str, suffix: &str, schema: Value, pointer: &str) -> GeneratorRequest {
    let name = type_name_for(self.request.type_name().as_str(), key, suffix);
    self.request.descend(TypeToken::new(name), schema, pointer)
  }

  /// Path of an enum or union minted for `key`, in the namespace of the enclosing struct.
  pub(crate) fn type_path_for(&self, key: &str, suffix: &str) -> TypePath {
    let name = type_name_for(self.request.type_name().as_str(), key, suffix);
    TypePath::new(
      &self.request.options().module_root,
      self.request.namespace(),
      TypeToken::new(name),
    )
  }
}

fn items_keyword(container: Container) -> &'static str {
  match container {
    Container::List => "items",
    Container::Map => "additionalProperties",
  }
}

fn primitive_kind(node: &Value) -> ScalarKind {
  if node.is_type("boolean") {
    ScalarKind::Bool
  } else if node.is_integer() {
    ScalarKind::Integer
  } else {
    ScalarKind::Number
  }
}

/// Pointer of one entry below `pointer`, escaping the key.
pub(crate) fn entry_pointer(pointer: &str, keyword: &str, key: &str) -> String {
  format!("{pointer}/{keyword}/{}", escape_pointer_token(key))
}
