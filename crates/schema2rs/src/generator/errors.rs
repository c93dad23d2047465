/// Failure of a generation run. Every variant but `Loading` names the schema pointer it was
/// raised for.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
  #[error("{pointer}: {kind}")]
  Resolution { pointer: String, kind: ResolutionError },

  #[error("{pointer}: {kind}")]
  Enum { pointer: String, kind: EnumError },

  #[error(transparent)]
  Loading(#[from] LoadingError),

  #[error("failed to format generated module '{module}': {message}")]
  Render { module: String, message: String },
}

impl GeneratorError {
  pub fn resolution(pointer: impl Into<String>, kind: ResolutionError) -> Self {
    Self::Resolution {
      pointer: pointer.into(),
      kind,
    }
  }

  pub fn enumeration(pointer: impl Into<String>, kind: EnumError) -> Self {
    Self::Enum {
      pointer: pointer.into(),
      kind,
    }
  }

  pub fn pointer(&self) -> Option<&str> {
    match self {
      Self::Resolution { pointer, .. } | Self::Enum { pointer, .. } => Some(pointer),
      Self::Loading(_) | Self::Render { .. } => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
  #[error("nesting exceeds the maximum depth of {max_depth}")]
  DepthExceeded { max_depth: usize },

  #[error("schema is not object-shaped and cannot become a struct")]
  NotObjectShaped,

  #[error("allOf branch {index} has an unsupported shape")]
  UnsupportedBranch { index: usize },

  #[error("reference '{reference}' cannot be resolved")]
  UnresolvedReference { reference: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
  #[error("enum literal {literal} is neither a string nor an integer")]
  UnsupportedLiteral { literal: String },

  #[error("enum declares no literals")]
  Empty,

  #[error("enums are disabled for this generation run")]
  Unsupported,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadingError {
  #[error("cannot read schema '{path}': {message}")]
  Read { path: String, message: String },

  #[error("schema '{path}' is not valid {format}: {message}")]
  Parse {
    path: String,
    format: &'static str,
    message: String,
  },

  #[error("schema '{path}' must be a JSON object at its root")]
  NotAnObject { path: String },
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
