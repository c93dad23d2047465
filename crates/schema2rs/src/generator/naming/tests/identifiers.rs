use std::collections::BTreeSet;

use crate::generator::naming::identifiers::{
  camel_case_key, ensure_unique, module_file_stem, to_rust_field_name, to_rust_module_name, to_rust_type_name,
  type_name_for,
};

#[test]
fn test_field_names() {
  let cases = [
    ("foo-bar", "foo_bar"),
    ("firstName", "first_name"),
    ("match", "r#match"),
    ("type", "r#type"),
    ("self", "self_"),
    ("123name", "_123name"),
    ("", "_"),
    ("  ", "_"),
    ("-created-date", "negative_created_date"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_rust_field_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_camel_case_key() {
  let cases = [
    ("first_name", "firstName"),
    ("first-name", "firstName"),
    ("path/to value", "pathToValue"),
    ("already camelCase", "alreadyCamelCase"),
    ("_leading", "leading"),
    ("dots.are.dropped", "dotsaredropped"),
    ("", ""),
  ];
  for (input, expected) in cases {
    assert_eq!(camel_case_key(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_type_name_for() {
  assert_eq!(type_name_for("Root", "billing_address", ""), "RootBillingAddress");
  assert_eq!(type_name_for("Root", "choice", "Alternative1"), "RootChoiceAlternative1");
  assert_eq!(type_name_for("Root", "tags", "Item"), "RootTagsItem");
  assert_eq!(type_name_for("", "", ""), "Unnamed");
  assert_eq!(type_name_for("", "1st", ""), "T1st");
  assert_eq!(type_name_for("", "value", ""), "ValueType");
}

#[test]
fn test_type_names() {
  let cases = [
    ("address", "Address"),
    ("user_profile", "UserProfile"),
    ("user-profile.schema", "UserProfileSchema"),
    ("BillingAddress", "BillingAddress"),
    ("$defs", "Defs"),
    ("123Response", "T123Response"),
    ("", "Unnamed"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_rust_type_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_module_names() {
  assert_eq!(to_rust_module_name("Definitions"), "definitions");
  assert_eq!(to_rust_module_name("UserProfile"), "user_profile");
  assert_eq!(to_rust_module_name("Type"), "r#type");
  assert_eq!(module_file_stem("r#type"), "type");
  assert_eq!(module_file_stem("definitions"), "definitions");
}

#[test]
fn test_ensure_unique() {
  let used: BTreeSet<String> = ["VALUE_A".to_string(), "VALUE_A2".to_string()].into_iter().collect();
  assert_eq!(ensure_unique("VALUE_B", &used), "VALUE_B");
  assert_eq!(ensure_unique("VALUE_A", &used), "VALUE_A3");
}
