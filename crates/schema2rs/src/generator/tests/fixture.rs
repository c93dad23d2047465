use crate::generator::{orchestrator::Orchestrator, request::GeneratorOptions};

const SCHEMA: &str = include_str!("../../../../schema2rs-support/tests/fixtures/query.schema.json");
const FIXTURE: &str = include_str!("../../../../schema2rs-support/tests/fixtures/mod.rs");

fn normalize(source: &str) -> String {
  prettyplease::unparse(&syn::parse_file(source).unwrap())
}

#[test]
fn test_checked_in_fixture_matches_generator() {
  let schema = serde_json::from_str(SCHEMA).unwrap();
  let options = GeneratorOptions::builder()
    .module_root(vec!["crate".to_string(), "fixtures".to_string()])
    .build();
  let output = Orchestrator::new(schema, "Query", options)
    .with_source_path("query.schema.json")
    .generate()
    .unwrap();

  assert_eq!(output.files.len(), 1);
  let generated = &output.file("mod.rs").unwrap().contents;
  assert_eq!(
    normalize(generated),
    normalize(FIXTURE),
    "tests/fixtures/mod.rs is stale; regenerate it from query.schema.json"
  );
}
