use std::path::{Path, PathBuf};

use crate::generator::orchestrator::GeneratedFile;

/// Destination of generated files.
pub trait Writer {
  /// `path` is relative to the writer's output directory.
  #[allow(async_fn_in_trait)]
  async fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()>;

  #[allow(async_fn_in_trait)]
  async fn write_all(&self, files: &[GeneratedFile]) -> anyhow::Result<()> {
    for file in files {
      self.write(&file.path, &file.contents).await?;
    }
    Ok(())
  }
}

/// Writes below an output directory, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FsWriter {
  root: PathBuf,
}

impl FsWriter {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }
}

impl Writer for FsWriter {
  async fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
    let target = self.root.join(path);
    if let Some(parent) = target.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&target, contents).await?;
    Ok(())
  }
}

/// Hands every file to a sink instead of touching the filesystem. Used by `--dry-run`.
pub struct DebugWriter<F> {
  sink: F,
}

impl<F: Fn(&Path, &str)> DebugWriter<F> {
  pub fn new(sink: F) -> Self {
    Self { sink }
  }
}

impl<F: Fn(&Path, &str)> Writer for DebugWriter<F> {
  async fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
    (self.sink)(path, contents);
    Ok(())
  }
}
