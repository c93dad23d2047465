use crate::generator::naming::identifiers::to_rust_type_name;

/// Prefix every local JSON pointer starts with.
pub(crate) const LOCAL_POINTER_PREFIX: &str = "#/";

/// Unescapes a single JSON pointer reference token (`~1` -> `/`, `~0` -> `~`).
pub(crate) fn unescape_pointer_token(token: &str) -> String {
  token.replace("~1", "/").replace("~0", "~")
}

/// Escapes a key so it can be appended to a JSON pointer.
pub(crate) fn escape_pointer_token(token: &str) -> String {
  token.replace('~', "~0").replace('/', "~1")
}

/// Splits a definition pointer into its namespace and type name.
///
/// `#/definitions/address/$defs/name` becomes namespace `["Definitions", "Address", "Defs"]`
/// and type name `Name`. Returns `None` for pointers that are not local or name nothing.
pub(crate) fn definition_path(pointer: &str) -> Option<(Vec<String>, String)> {
  let path = pointer.strip_prefix(LOCAL_POINTER_PREFIX)?;
  let mut segments: Vec<String> = path
    .split('/')
    .map(|token| namespace_segment(&unescape_pointer_token(token)))
    .collect();

  let name = segments.pop().filter(|_| !path.is_empty())?;
  Some((segments, name))
}

fn namespace_segment(token: &str) -> String {
  match token {
    "$defs" => "Defs".to_string(),
    other => to_rust_type_name(other),
  }
}
