use strum::Display;

use crate::generator::ast::TypeUnit;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub structs_generated: usize,
  pub enums_generated: usize,
  pub unions_generated: usize,
  pub entries_generated: usize,
  pub definitions_collected: usize,
  pub files_generated: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_type(&mut self, unit: &TypeUnit) {
    self.types_generated += 1;
    match unit.kind() {
      "struct" => self.structs_generated += 1,
      "enum" => self.enums_generated += 1,
      "entry" => self.entries_generated += 1,
      _ => self.unions_generated += 1,
    }
  }

  pub fn record_definitions(&mut self, count: usize) {
    self.definitions_collected += count;
  }

  pub fn record_file(&mut self) {
    self.files_generated += 1;
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Type '{path}' is generated more than once; the unit from '{pointer}' replaces the earlier one")]
  TypeNameCollision { path: String, pointer: String },
  #[strum(to_string = "Default {default} of '{pointer}' does not fit the property type and is ignored")]
  DefaultIgnored { pointer: String, default: String },
}
