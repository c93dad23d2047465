use serde_json::json;

use crate::generator::naming::enum_cases::case_identifiers;

#[test]
fn test_case_identifiers_upper_case() {
  let literals = [json!("active"), json!("in-review"), json!("done")];
  assert_eq!(case_identifiers(&literals), vec!["ACTIVE", "INREVIEW", "DONE"]);
}

#[test]
fn test_prefix_applies_to_every_case() {
  let literals = [json!(1), json!("2"), json!("two")];
  assert_eq!(case_identifiers(&literals), vec!["VALUE_1", "VALUE_2", "VALUE_TWO"]);
}

#[test]
fn test_empty_literal() {
  let literals = [json!(""), json!("set")];
  assert_eq!(case_identifiers(&literals), vec!["VALUE_EMPTY", "VALUE_SET"]);
}

#[test]
fn test_colliding_cases_get_suffixes() {
  let literals = [json!("a-b"), json!("a_b"), json!("AB")];
  assert_eq!(case_identifiers(&literals), vec!["AB", "AB2", "AB3"]);
}

#[test]
fn test_negative_integers() {
  let literals = [json!(-1), json!(1)];
  assert_eq!(case_identifiers(&literals), vec!["VALUE_1", "VALUE_12"]);
}
