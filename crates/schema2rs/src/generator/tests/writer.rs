use std::{
  cell::RefCell,
  path::{Path, PathBuf},
};

use crate::generator::{
  orchestrator::GeneratedFile,
  writer::{DebugWriter, FsWriter, Writer},
};

fn files() -> Vec<GeneratedFile> {
  vec![
    GeneratedFile {
      path: PathBuf::from("mod.rs"),
      contents: "pub mod definitions;\n".to_string(),
    },
    GeneratedFile {
      path: PathBuf::from("definitions/mod.rs"),
      contents: "pub struct Address {}\n".to_string(),
    },
  ]
}

#[tokio::test]
async fn test_fs_writer_creates_directories() {
  let dir = tempfile::tempdir().unwrap();
  let writer = FsWriter::new(dir.path().join("generated"));

  writer.write_all(&files()).await.unwrap();

  let nested = tokio::fs::read_to_string(dir.path().join("generated/definitions/mod.rs"))
    .await
    .unwrap();
  assert_eq!(nested, "pub struct Address {}\n");
  assert!(dir.path().join("generated/mod.rs").is_file());
}

#[tokio::test]
async fn test_debug_writer_touches_nothing() {
  let written = RefCell::new(Vec::new());
  let writer = DebugWriter::new(|path: &Path, contents: &str| {
    written.borrow_mut().push((path.to_path_buf(), contents.len()));
  });

  writer.write_all(&files()).await.unwrap();

  assert_eq!(
    *written.borrow(),
    [(PathBuf::from("mod.rs"), 21), (PathBuf::from("definitions/mod.rs"), 22)]
  );
}
