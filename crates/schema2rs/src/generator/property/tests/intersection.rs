use serde_json::json;

use super::request_for;
use crate::{
  generator::{
    errors::{GeneratorError, ResolutionError},
    property::{Property, PropertyResolver, intersection::merge_all_of},
  },
  utils::SchemaExt,
};

#[test]
fn test_required_is_an_ordered_union() {
  let request = request_for(json!({"type": "object"}));
  let node = json!({"allOf": [
    {"properties": {"city": {"type": "string"}, "street": {"type": "string"}}, "required": ["city", "street"]},
    {"properties": {"country": {"type": "string"}}, "required": ["street", "country"]}
  ]});

  let merged = merge_all_of(&node, &request, "#/properties/address").unwrap();
  assert_eq!(merged.required_keys(), vec!["city", "street", "country"]);
  assert_eq!(merged["type"], json!("object"));
  assert!(merged.get("allOf").is_none());
  let keys: Vec<&str> = merged.properties().unwrap().keys().map(String::as_str).collect();
  assert_eq!(keys, vec!["city", "street", "country"]);
}

#[test]
fn test_later_properties_overwrite_earlier() {
  let request = request_for(json!({"type": "object"}));
  let node = json!({
    "allOf": [
      {"properties": {"code": {"type": "string"}}},
      {"properties": {"code": {"type": "integer"}}}
    ],
    "properties": {"note": {"type": "string"}},
    "required": ["note"]
  });

  let merged = merge_all_of(&node, &request, "#").unwrap();
  assert_eq!(merged["properties"]["code"], json!({"type": "integer"}));
  assert_eq!(merged["properties"]["note"], json!({"type": "string"}));
  assert_eq!(merged.required_keys(), vec!["note"]);
}

#[test]
fn test_reference_branches_are_merged() {
  let request = request_for(json!({
    "type": "object",
    "definitions": {
      "base": {"properties": {"id": {"type": "integer"}}, "required": ["id"]},
      "alias": {"$ref": "#/definitions/base"}
    }
  }));
  let node = json!({"allOf": [
    {"$ref": "#/definitions/alias"},
    {"properties": {"name": {"type": "string"}}}
  ]});

  let merged = merge_all_of(&node, &request, "#/properties/item").unwrap();
  assert_eq!(merged.required_keys(), vec!["id"]);
  assert!(merged["properties"].get("id").is_some());
  assert!(merged["properties"].get("name").is_some());
}

#[test]
fn test_unresolvable_reference_branch() {
  let request = request_for(json!({"type": "object"}));
  let node = json!({"allOf": [{"$ref": "#/definitions/missing"}]});

  let error = merge_all_of(&node, &request, "#/properties/item").unwrap_err();
  let GeneratorError::Resolution { pointer, kind } = error else {
    panic!("expected a resolution error");
  };
  assert_eq!(pointer, "#/properties/item/allOf/0");
  assert_eq!(
    kind,
    ResolutionError::UnresolvedReference {
      reference: "#/definitions/missing".to_string()
    }
  );
}

#[test]
fn test_alternative_branches_require_common_keys() {
  let request = request_for(json!({"type": "object"}));
  let node = json!({"allOf": [
    {"oneOf": [
      {"properties": {"a": {"type": "string"}, "b": {"type": "string"}}, "required": ["a", "b"]},
      {"properties": {"a": {"type": "string"}, "c": {"type": "string"}}, "required": ["c", "a"]}
    ]}
  ]});

  let merged = merge_all_of(&node, &request, "#").unwrap();
  assert_eq!(merged.required_keys(), vec!["a"]);
  let keys: Vec<&str> = merged.properties().unwrap().keys().map(String::as_str).collect();
  assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn test_non_object_branch_is_rejected() {
  let request = request_for(json!({"type": "object"}));
  let node = json!({"allOf": [{"properties": {}}, {"type": "string"}]});

  let error = merge_all_of(&node, &request, "#").unwrap_err();
  assert!(matches!(
    error,
    GeneratorError::Resolution {
      kind: ResolutionError::UnsupportedBranch { index: 1 },
      ..
    }
  ));
}

#[test]
fn test_nested_all_of() {
  let request = request_for(json!({"type": "object"}));
  let node = json!({"allOf": [
    {"allOf": [{"properties": {"x": {"type": "number"}}, "required": ["x"]}]},
    true
  ]});

  let merged = merge_all_of(&node, &request, "#").unwrap();
  assert_eq!(merged.required_keys(), vec!["x"]);
}

#[test]
fn test_intersection_mints_a_class() {
  let request = request_for(json!({"type": "object"}));
  let resolver = PropertyResolver::new(&request);
  let node = json!({"allOf": [{"properties": {"city": {"type": "string"}}}]});

  let Property::Intersection(class) = resolver.resolve_property("address", "", &node, "#/properties/address").unwrap()
  else {
    panic!("expected an intersection");
  };
  assert_eq!(class.type_name().as_str(), "RootAddress");
  assert!(class.schema().is_class_shaped());
}
