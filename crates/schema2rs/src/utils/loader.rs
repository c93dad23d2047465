use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde_json::Value;

use crate::generator::errors::{GeneratorResult, LoadingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaFormat {
  #[default]
  Json,
  Yaml,
}

impl SchemaFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Json => "JSON",
      Self::Yaml => "YAML",
    }
  }
}

/// Memory-maps a schema document and decodes it as JSON or YAML, chosen by file extension.
pub struct SchemaLoader {
  path: PathBuf,
  file: AsyncMmapFile,
  format: SchemaFormat,
}

impl SchemaLoader {
  pub async fn open(path: &Path) -> Result<Self, LoadingError> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SchemaFormat::default(), SchemaFormat::from_extension);

    let file = AsyncMmapFile::open(path).await.map_err(|err| LoadingError::Read {
      path: path.display().to_string(),
      message: err.to_string(),
    })?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
      format,
    })
  }

  pub fn format(&self) -> SchemaFormat {
    self.format
  }

  pub fn parse(&self) -> Result<Value, LoadingError> {
    parse_document(self.file.as_slice(), self.format, &self.path)
  }
}

pub(crate) fn parse_document(bytes: &[u8], format: SchemaFormat, path: &Path) -> Result<Value, LoadingError> {
  let parse_error = |message: String| LoadingError::Parse {
    path: path.display().to_string(),
    format: format.label(),
    message,
  };

  let document: Value = match format {
    SchemaFormat::Json => serde_json::from_slice(bytes).map_err(|err| parse_error(err.to_string()))?,
    SchemaFormat::Yaml => serde_yaml::from_slice(bytes).map_err(|err| parse_error(err.to_string()))?,
  };

  if !document.is_object() {
    return Err(LoadingError::NotAnObject {
      path: path.display().to_string(),
    });
  }
  Ok(document)
}

/// Opens and decodes a schema document in one step.
pub async fn load_schema(path: &Path) -> GeneratorResult<Value> {
  Ok(SchemaLoader::open(path).await?.parse()?)
}
