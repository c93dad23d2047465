use crate::generator::naming::definitions::{definition_path, escape_pointer_token, unescape_pointer_token};

#[test]
fn test_definition_path_nests_namespaces() {
  let (namespace, name) = definition_path("#/definitions/address/$defs/name").unwrap();
  assert_eq!(namespace, vec!["Definitions", "Address", "Defs"]);
  assert_eq!(name, "Name");
}

#[test]
fn test_definition_path_top_level() {
  let (namespace, name) = definition_path("#/$defs/user_profile").unwrap();
  assert_eq!(namespace, vec!["Defs"]);
  assert_eq!(name, "UserProfile");
}

#[test]
fn test_definition_path_unescapes_tokens() {
  let (namespace, name) = definition_path("#/definitions/a~1b").unwrap();
  assert_eq!(namespace, vec!["Definitions"]);
  assert_eq!(name, "AB");
}

#[test]
fn test_definition_path_rejects_non_local() {
  assert!(definition_path("other.json#/definitions/a").is_none());
  assert!(definition_path("#").is_none());
  assert!(definition_path("#/").is_none());
}

#[test]
fn test_pointer_escaping() {
  assert_eq!(escape_pointer_token("a/b~c"), "a~1b~0c");
  assert_eq!(unescape_pointer_token("a~1b~0c"), "a/b~c");
}
