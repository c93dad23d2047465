use std::{
  char::{ToLowercase, ToUppercase},
  collections::{BTreeSet, HashSet},
  iter::Peekable,
  sync::LazyLock,
};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

pub(crate) static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen",
    // 'self' cannot be a raw identifier; field and module names turn it into `self_`.
    "self", "Self",
  ]
  .into_iter()
  .collect()
});

/// Names generated code relies on; a schema type with one of these names would shadow it.
static RESERVED_PASCAL_CASE: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  ["Self", "Option", "Result", "String", "Vec", "Value", "Clone", "Default"]
    .into_iter()
    .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Separators that start a new camelCase segment inside a property key.
const KEY_SEPARATORS: [char; 4] = ['-', '_', '/', ' '];

/// Transliterates to ASCII, replaces invalid characters with underscores, collapses
/// consecutive underscores and trims leading or trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Ensures a name is unique within a set of used names, appending a numeric suffix if needed.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

/// camelCases a property key: every segment after a separator is capitalized and any
/// remaining non-alphanumeric character is dropped. The first segment keeps its case.
pub(crate) fn camel_case_key(key: &str) -> String {
  let ascii = any_ascii(key);
  let mut result = String::with_capacity(ascii.len());
  let mut capitalize_next = false;

  for ch in ascii.chars() {
    if KEY_SEPARATORS.contains(&ch) {
      capitalize_next = !result.is_empty();
      continue;
    }
    if !ch.is_ascii_alphanumeric() {
      continue;
    }
    if capitalize_next {
      result.push(ch.to_ascii_uppercase());
      capitalize_next = false;
    } else {
      result.push(ch);
    }
  }

  result
}

/// Upper-cases the first character and leaves the rest untouched.
pub(crate) fn capitalize(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

/// Name of the type minted for property `key` of `parent`: `parent + Capitalize(camelCase(key)) + suffix`.
///
/// The result is a valid Rust type identifier: empty names become `Unnamed`, a leading digit
/// is prefixed with `T` and names that would shadow types used by generated code get a `Type`
/// suffix.
pub(crate) fn type_name_for(parent: &str, key: &str, suffix: &str) -> String {
  let ident = format!("{parent}{}{suffix}", capitalize(&camel_case_key(key)));
  finish_type_name(ident)
}

/// Converts a free-form name (file stem, definition key) into a `PascalCase` type name.
///
/// Inputs that already mix upper and lower case without separators keep their capitalization.
pub(crate) fn to_rust_type_name(name: &str) -> String {
  let has_separators = name.contains(['-', '_', '.', ' ', '/']);
  let has_upper = name.chars().any(|c| c.is_ascii_uppercase());
  let has_lower = name.chars().any(|c| c.is_ascii_lowercase());

  let ident: String = if !has_separators && has_upper && has_lower {
    capitalize(&any_ascii(name).chars().filter(char::is_ascii_alphanumeric).collect::<String>())
  } else {
    any_ascii(name)
      .chars()
      .capitalize_words_with_boundaries()
      .filter(char::is_ascii_alphanumeric)
      .collect()
  };

  finish_type_name(ident)
}

fn finish_type_name(mut ident: String) -> String {
  if ident.is_empty() {
    return "Unnamed".to_string();
  }
  prefix_if_digit_start(&mut ident, 'T');
  if RESERVED_PASCAL_CASE.contains(ident.as_str()) {
    ident.push_str("Type");
  }
  ident
}

/// Converts a string into a valid Rust field name (`snake_case`).
///
/// # Rules:
/// 1. If the string starts with `-`, it's stripped and "negative_" is prepended to the result.
/// 2. Sanitizes the base string.
/// 3. Converts to `snake_case`.
/// 4. If the result is `self`, it becomes `self_`.
/// 5. If the result is a keyword, it gets a raw identifier prefix (`r#`).
/// 6. If the result starts with a digit, it's prefixed with `_`.
/// 7. If the result is empty, it becomes `_`.
pub(crate) fn to_rust_field_name(name: &str) -> String {
  let has_leading_minus = name.starts_with('-');
  let name_without_minus = name.strip_prefix('-').unwrap_or(name);

  let mut ident = sanitize(name_without_minus).to_snake_case();

  if ident.is_empty() {
    return "_".to_string();
  }

  if has_leading_minus {
    ident = format!("negative_{ident}");
  }

  if ident == "self" {
    return "self_".to_string();
  }

  if FORBIDDEN_IDENTIFIERS.contains(ident.as_str()) {
    return format!("r#{ident}");
  }

  prefix_if_digit_start(&mut ident, '_');
  ident
}

/// Module name for a namespace segment. Uses the field rules, so keywords come back raw (`r#type`).
pub(crate) fn to_rust_module_name(segment: &str) -> String {
  match to_rust_field_name(segment).as_str() {
    "_" => "unnamed".to_string(),
    other => other.to_string(),
  }
}

/// Directory or file stem for a module name (`r#type` -> `type`).
pub(crate) fn module_file_stem(module_name: &str) -> &str {
  module_name.strip_prefix("r#").unwrap_or(module_name)
}

fn prefix_if_digit_start(ident: &mut String, prefix: char) {
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, prefix);
  }
}

/// An extension trait for char iterators to add word capitalization.
pub trait CapitalizeWordsExt: Iterator<Item = char> {
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized;
}

impl<I> CapitalizeWordsExt for I
where
  I: Iterator<Item = char>,
{
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized,
  {
    CapitalizeWordsWithBoundaries {
      iter: self.peekable(),
      capitalize_next: true,
      prev_was_lower: false,
      pending_upper: None,
      pending_lower: None,
    }
  }
}

pub struct CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  iter: Peekable<I>,
  capitalize_next: bool,
  prev_was_lower: bool,
  pending_upper: Option<ToUppercase>,
  pending_lower: Option<ToLowercase>,
}

impl<I> Iterator for CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  type Item = char;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(ref mut upper_iter) = self.pending_upper {
      if let Some(c) = upper_iter.next() {
        return Some(c);
      }
      self.pending_upper = None;
    }

    if let Some(ref mut lower_iter) = self.pending_lower {
      if let Some(c) = lower_iter.next() {
        return Some(c);
      }
      self.pending_lower = None;
    }

    let c = self.iter.next()?;

    if !c.is_ascii_alphanumeric() {
      self.capitalize_next = self.iter.peek().is_some_and(char::is_ascii_alphanumeric);
      self.prev_was_lower = false;
      return Some(c);
    }

    let is_lower = c.is_ascii_lowercase();
    let is_upper = c.is_ascii_uppercase();

    let should_capitalize = self.capitalize_next
      || (self.prev_was_lower && is_upper)
      || (is_upper && self.iter.peek().is_some_and(char::is_ascii_lowercase));

    self.prev_was_lower = is_lower;
    self.capitalize_next = false;

    let mut cased = if should_capitalize {
      CasedChar::Upper(c.to_uppercase())
    } else {
      CasedChar::Lower(c.to_lowercase())
    };
    let first = cased.next();
    match cased {
      CasedChar::Upper(rest) => self.pending_upper = Some(rest),
      CasedChar::Lower(rest) => self.pending_lower = Some(rest),
    }
    first
  }
}

enum CasedChar {
  Upper(ToUppercase),
  Lower(ToLowercase),
}

impl CasedChar {
  fn next(&mut self) -> Option<char> {
    match self {
      Self::Upper(iter) => iter.next(),
      Self::Lower(iter) => iter.next(),
    }
  }
}
