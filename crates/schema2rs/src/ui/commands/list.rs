use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{orchestrator::Orchestrator, request::GeneratorOptions},
  ui::{Colors, colors::comfy, term_width},
  utils::loader::load_schema,
};

/// Prints every type `generate` would emit for `input`, with its kind and output file.
pub async fn list_types(input: &Path, class: Option<&str>, colors: &Colors) -> anyhow::Result<()> {
  let schema = load_schema(input).await?;
  let root_name = match class {
    Some(name) => name.to_string(),
    None => super::generate::root_name_from_path(input)?,
  };
  let output = Orchestrator::new(schema, &root_name, GeneratorOptions::default()).generate()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("TYPE").fg(comfy(colors.label())));
  row.add_cell(Cell::new("KIND").fg(comfy(colors.label())));
  row.add_cell(Cell::new("FILE").fg(comfy(colors.label())));
  table.set_header(row);

  for summary in &output.types {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(summary.path.to_string())
        .fg(comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(summary.kind)
        .fg(comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(summary.file.display()).fg(comfy(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
