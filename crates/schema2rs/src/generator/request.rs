use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::generator::{
  ast::{TypePath, TypeToken},
  naming::definitions::escape_pointer_token,
  reference::ReferenceLookup,
};

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GeneratorOptions {
  /// Defaulted properties become nullable; absent keys still decode to the default.
  #[builder(default)]
  pub treat_defaulted_as_optional: bool,
  /// Whether the target supports generated enums. Without them any `enum` keyword is an error.
  #[builder(default = true)]
  pub enums_supported: bool,
  #[builder(default = DEFAULT_MAX_DEPTH)]
  pub max_depth: usize,
  /// Rust path of the module the output directory is mounted at.
  #[builder(default = vec!["crate".to_string()])]
  pub module_root: Vec<String>,
}

impl Default for GeneratorOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl GeneratorOptions {
  /// Splits a module path such as `crate::models` into its segments.
  pub fn parse_module_root(path: &str) -> Vec<String> {
    path
      .split("::")
      .map(str::trim)
      .filter(|segment| !segment.is_empty())
      .map(str::to_owned)
      .collect()
  }
}

struct RequestContext {
  options: GeneratorOptions,
  lookup: Box<dyn ReferenceLookup>,
}

/// Everything needed to realize one type. Immutable; the `with_*` methods return new requests
/// that share the options and reference lookup.
#[derive(Clone)]
pub struct GeneratorRequest {
  schema: Arc<Value>,
  type_name: TypeToken,
  namespace: Arc<[String]>,
  pointer: Arc<str>,
  depth: usize,
  context: Arc<RequestContext>,
}

impl GeneratorRequest {
  pub fn new(
    schema: Value,
    type_name: TypeToken,
    options: GeneratorOptions,
    lookup: impl ReferenceLookup + 'static,
  ) -> Self {
    Self {
      schema: Arc::new(schema),
      type_name,
      namespace: Arc::from(Vec::new()),
      pointer: Arc::from("#"),
      depth: 0,
      context: Arc::new(RequestContext {
        options,
        lookup: Box::new(lookup),
      }),
    }
  }

  #[must_use]
  pub fn with_schema(&self, schema: Value) -> Self {
    Self {
      schema: Arc::new(schema),
      ..self.clone()
    }
  }

  #[must_use]
  pub fn with_class(&self, type_name: TypeToken) -> Self {
    Self {
      type_name,
      ..self.clone()
    }
  }

  #[must_use]
  pub fn with_namespace(&self, namespace: Vec<String>) -> Self {
    Self {
      namespace: Arc::from(namespace),
      ..self.clone()
    }
  }

  #[must_use]
  pub fn with_pointer(&self, pointer: &str) -> Self {
    Self {
      pointer: Arc::from(pointer),
      ..self.clone()
    }
  }

  /// Request for a type nested one level below this one, in the same namespace.
  #[must_use]
  pub fn descend(&self, type_name: TypeToken, schema: Value, pointer: &str) -> Self {
    Self {
      schema: Arc::new(schema),
      type_name,
      pointer: Arc::from(pointer),
      depth: self.depth + 1,
      ..self.clone()
    }
  }

  /// Pointer of a node below this request's schema.
  pub fn child_pointer(&self, tokens: &[&str]) -> String {
    tokens.iter().fold(self.pointer.to_string(), |mut pointer, token| {
      pointer.push('/');
      pointer.push_str(&escape_pointer_token(token));
      pointer
    })
  }

  pub fn schema(&self) -> &Value {
    &self.schema
  }

  pub fn type_name(&self) -> &TypeToken {
    &self.type_name
  }

  pub fn namespace(&self) -> &[String] {
    &self.namespace
  }

  pub fn pointer(&self) -> &str {
    &self.pointer
  }

  pub fn depth(&self) -> usize {
    self.depth
  }

  pub fn options(&self) -> &GeneratorOptions {
    &self.context.options
  }

  pub fn lookup(&self) -> &dyn ReferenceLookup {
    self.context.lookup.as_ref()
  }

  pub fn type_path(&self) -> TypePath {
    TypePath::new(&self.options().module_root, &self.namespace, self.type_name.clone())
  }

  pub fn depth_exceeded(&self) -> bool {
    self.depth() > self.options().max_depth
  }
}

impl fmt::Debug for GeneratorRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GeneratorRequest")
      .field("type_name", &self.type_name)
      .field("namespace", &self.namespace)
      .field("pointer", &self.pointer)
      .field("depth", &self.depth)
      .finish_non_exhaustive()
  }
}
