use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use serde_json::Value;

use crate::{
  generator::{
    ast::TypePath,
    hooks::serde_hooks,
    metrics::GenerationStats,
    orchestrator::Orchestrator,
    request::GeneratorOptions,
    writer::{DebugWriter, FsWriter, Writer},
  },
  ui::{Colors, GenerateCommand},
  utils::loader::load_schema,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub root_name: String,
  pub options: GeneratorOptions,
  pub references: Vec<(String, TypePath)>,
  pub serde: bool,
  pub dry_run: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      class,
      module_root,
      reference,
      treat_defaulted_as_optional,
      no_enums,
      serde,
      dry_run,
      max_depth,
      verbose,
      quiet,
    } = command;

    let root_name = match class {
      Some(name) => name,
      None => root_name_from_path(&input)?,
    };
    let module_root = GeneratorOptions::parse_module_root(&module_root);
    if module_root.is_empty() {
      anyhow::bail!("Module root must name at least one module (e.g., crate::models)");
    }

    let options = GeneratorOptions::builder()
      .treat_defaulted_as_optional(treat_defaulted_as_optional)
      .enums_supported(!no_enums)
      .max_depth(max_depth)
      .module_root(module_root)
      .build();

    Ok(Self {
      input,
      output,
      root_name,
      options,
      references: parse_references(&reference)?,
      serde,
      dry_run,
      verbose,
      quiet,
    })
  }

  async fn load_schema(&self) -> anyhow::Result<Value> {
    Ok(load_schema(&self.input).await?)
  }

  pub(crate) fn create_orchestrator(&self, schema: Value) -> Orchestrator {
    let orchestrator = Orchestrator::new(schema, &self.root_name, self.options.clone())
      .with_source_path(self.input.display().to_string());
    let orchestrator = if self.serde {
      orchestrator.with_hooks(serde_hooks())
    } else {
      orchestrator
    };

    self
      .references
      .iter()
      .fold(orchestrator, |orchestrator, (pointer, path)| {
        orchestrator.with_reference(pointer.clone(), path.clone())
      })
  }
}

pub(super) fn root_name_from_path(input: &Path) -> anyhow::Result<String> {
  let stem = input
    .file_name()
    .and_then(|name| name.to_str())
    .and_then(|name| name.split('.').next())
    .filter(|stem| !stem.is_empty())
    .with_context(|| format!("Cannot derive a type name from '{}'; pass --class", input.display()))?;
  Ok(stem.to_string())
}

pub(crate) fn parse_references(entries: &[String]) -> anyhow::Result<Vec<(String, TypePath)>> {
  entries
    .iter()
    .map(|entry| {
      let (pointer, path) = entry.split_once('=').ok_or_else(|| {
        anyhow::anyhow!(
          "Invalid reference format '{entry}': expected POINTER=PATH (e.g., #/definitions/Money=crate::shared::Money)"
        )
      })?;
      let path = TypePath::parse(path)
        .ok_or_else(|| anyhow::anyhow!("Invalid reference format '{entry}': '{path}' is not a Rust type path"))?;
      Ok((pointer.trim().to_string(), path))
    })
    .collect()
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn detail(&self, message: &str) {
    if self.config.verbose {
      self.info(&message.with(self.colors.info()).to_string());
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading schema from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(
      &format!("Generating Rust types for {}...", self.config.root_name)
        .with(self.colors.primary())
        .to_string(),
    );
    let module_root = self.config.options.module_root.join("::");
    self.detail(&format!("Module root: {module_root}"));
    for (pointer, path) in &self.config.references {
      self.detail(&format!("Reference {pointer} -> {path}"));
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("", format!("{} structs", stats.structs_generated));
    self.stat("", format!("{} enums", stats.enums_generated));
    self.stat("", format!("{} unions", stats.unions_generated));
    if stats.entries_generated > 0 {
      self.stat("", format!("{} map entries", stats.entries_generated));
    }
    self.stat("Definitions collected:", stats.definitions_collected.to_string());
    self.stat("Files:", stats.files_generated.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || !self.config.verbose {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    let message = if self.config.dry_run {
      "Dry run, nothing is written".to_string()
    } else {
      format!("Writing to: {}", self.config.output.display())
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  /// Dry-run output; printed even with `--quiet`.
  fn print_file(&self, path: &Path, contents: &str) {
    println!();
    println!(
      "{} {}",
      "==>".with(self.colors.accent()),
      self.config.output.join(path).display().to_string().with(self.colors.label())
    );
    println!("{contents}");
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Rust types".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let schema = config.load_schema().await?;

  logger.log_generating();
  let output = config
    .create_orchestrator(schema)
    .generate()
    .inspect_err(|err| {
      if let Some(pointer) = err.pointer() {
        logger.detail(&format!("Failing schema node: {pointer}"));
      }
    })
    .with_context(|| format!("Failed to generate types from {}", config.input.display()))?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  for file in &output.files {
    logger.detail(&format!("Emitting {}", file.path.display()));
  }
  if config.dry_run {
    DebugWriter::new(|path: &Path, contents: &str| logger.print_file(path, contents))
      .write_all(&output.files)
      .await?;
  } else {
    FsWriter::new(&config.output).write_all(&output.files).await?;
  }

  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn command(input: &str) -> GenerateCommand {
    GenerateCommand {
      input: PathBuf::from(input),
      output: PathBuf::from("src/generated"),
      class: None,
      module_root: "crate".to_string(),
      reference: Vec::new(),
      treat_defaulted_as_optional: false,
      no_enums: false,
      serde: false,
      dry_run: false,
      max_depth: 64,
      verbose: false,
      quiet: false,
    }
  }

  #[test]
  fn test_parse_references_empty() {
    assert!(parse_references(&[]).unwrap().is_empty());
  }

  #[test]
  fn test_parse_references_entries() {
    let result = parse_references(&[
      "#/definitions/Money=crate::shared::Money".to_string(),
      "#/$defs/Id = my_crate::Id".to_string(),
    ])
    .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].0, "#/definitions/Money");
    assert_eq!(result[0].1.to_string(), "crate::shared::Money");
    assert_eq!(result[1].0, "#/$defs/Id");
    assert_eq!(result[1].1.to_string(), "my_crate::Id");
  }

  #[test]
  fn test_parse_references_missing_equals() {
    let err = parse_references(&["#/definitions/Money".to_string()]).unwrap_err();
    assert!(err.to_string().contains("Invalid reference format"));
  }

  #[test]
  fn test_parse_references_invalid_path() {
    let err = parse_references(&["#/definitions/Money=crate::".to_string()]).unwrap_err();
    assert!(err.to_string().contains("is not a Rust type path"));
  }

  #[test]
  fn test_root_name_defaults_to_file_stem() {
    let config = GenerateConfig::from_command(command("schemas/person.schema.json")).unwrap();
    assert_eq!(config.root_name, "person");
  }

  #[test]
  fn test_explicit_class_wins() {
    let config = GenerateConfig::from_command(GenerateCommand {
      class: Some("Customer".to_string()),
      ..command("person.json")
    })
    .unwrap();
    assert_eq!(config.root_name, "Customer");
  }

  #[test]
  fn test_options_from_flags() {
    let config = GenerateConfig::from_command(GenerateCommand {
      module_root: "crate::models".to_string(),
      treat_defaulted_as_optional: true,
      no_enums: true,
      max_depth: 8,
      ..command("person.json")
    })
    .unwrap();

    assert_eq!(config.options.module_root, vec!["crate", "models"]);
    assert!(config.options.treat_defaulted_as_optional);
    assert!(!config.options.enums_supported);
    assert_eq!(config.options.max_depth, 8);
  }

  #[test]
  fn test_empty_module_root_is_rejected() {
    let result = GenerateConfig::from_command(GenerateCommand {
      module_root: "::".to_string(),
      ..command("person.json")
    });
    assert!(result.is_err());
  }

  #[test]
  fn test_orchestrator_uses_references() {
    let config = GenerateConfig::from_command(GenerateCommand {
      reference: vec!["#/definitions/Money=shared::Money".to_string()],
      ..command("order.json")
    })
    .unwrap();
    let schema = serde_json::json!({
      "type": "object",
      "properties": { "total": { "$ref": "#/definitions/Money" } },
      "required": ["total"],
      "definitions": { "Money": { "type": "object", "properties": { "cents": { "type": "integer" } } } }
    });

    let output = config.create_orchestrator(schema).generate().unwrap();
    assert_eq!(output.files.len(), 1);
    assert!(output.files[0].contents.contains("total: shared::Money,"));
    assert!(output.files[0].contents.contains("pub struct Order {"));
  }
}
