use std::collections::BTreeSet;

use any_ascii::any_ascii;
use serde_json::Value;

use crate::generator::naming::identifiers::ensure_unique;

const VALUE_PREFIX: &str = "VALUE_";
const EMPTY_CASE: &str = "EMPTY";

/// Derives one case identifier per enum literal, in literal order.
///
/// Non-alphanumeric characters are stripped and the rest upper-cased. A case that comes from a
/// numeric literal, starts with a digit or sanitizes to nothing (`EMPTY`) needs the `VALUE_`
/// prefix; when any case needs it every case gets it, so `[1, "2", "two"]` yields
/// `VALUE_1, VALUE_2, VALUE_TWO`. Identifiers that still collide get numeric suffixes.
pub(crate) fn case_identifiers(literals: &[Value]) -> Vec<String> {
  let labels: Vec<(String, bool)> = literals.iter().map(case_label).collect();
  let prefix_all = labels.iter().any(|(_, needs_prefix)| *needs_prefix);

  let mut used = BTreeSet::new();
  labels
    .into_iter()
    .map(|(label, _)| {
      let ident = if prefix_all {
        format!("{VALUE_PREFIX}{label}")
      } else {
        label
      };
      let ident = ensure_unique(&ident, &used);
      used.insert(ident.clone());
      ident
    })
    .collect()
}

fn case_label(literal: &Value) -> (String, bool) {
  let text = match literal {
    Value::String(text) => text.clone(),
    other => other.to_string(),
  };

  let sanitized: String = any_ascii(&text)
    .chars()
    .filter(char::is_ascii_alphanumeric)
    .map(|c| c.to_ascii_uppercase())
    .collect();

  if sanitized.is_empty() {
    return (EMPTY_CASE.to_string(), true);
  }

  let needs_prefix = literal.is_number() || sanitized.starts_with(|c: char| c.is_ascii_digit());
  (sanitized, needs_prefix)
}
