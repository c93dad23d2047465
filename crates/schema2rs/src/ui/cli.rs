use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::request::DEFAULT_MAX_DEPTH;

#[derive(Parser, Debug)]
#[command(name = "schema2rs")]
#[command(author, version, about = "JSON Schema to Rust value type generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a JSON Schema document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate Rust value types from a JSON Schema document
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateCommand {
  /// Path to the JSON or YAML schema document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the generated modules are written to
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Name of the root type (defaults to the input file stem)
  #[arg(short, long, value_name = "NAME")]
  pub class: Option<String>,

  /// Rust module path the output directory is mounted at
  #[arg(long, value_name = "PATH", default_value = "crate")]
  pub module_root: String,

  /// Map a schema reference to an existing type instead of generating it (POINTER=PATH)
  #[arg(short, long, value_name = "POINTER=PATH")]
  pub reference: Vec<String>,

  /// Make defaulted properties nullable; absent keys still decode to the default
  #[arg(long, default_value_t = false)]
  pub treat_defaulted_as_optional: bool,

  /// Reject `enum` keywords instead of generating Rust enums
  #[arg(long, default_value_t = false)]
  pub no_enums: bool,

  /// Implement serde Serialize/Deserialize on generated types
  #[arg(long, default_value_t = false)]
  pub serde: bool,

  /// Print the generated files instead of writing them
  #[arg(long, default_value_t = false)]
  pub dry_run: bool,

  /// Maximum nesting depth of inline objects and allOf merges
  #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
  pub max_depth: usize,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the types a schema document generates
  Types {
    /// Path to the JSON or YAML schema document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Name of the root type (defaults to the input file stem)
    #[arg(short, long, value_name = "NAME")]
    class: Option<String>,
  },
}
