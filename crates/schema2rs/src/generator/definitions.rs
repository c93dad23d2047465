use std::collections::{BTreeMap, BTreeSet};

use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};
use serde_json::Value;

use crate::{
  generator::{
    ast::TypeToken,
    naming::definitions::{LOCAL_POINTER_PREFIX, definition_path, escape_pointer_token},
  },
  utils::SchemaExt,
};

pub(crate) const DEFINITION_KEYWORDS: [&str; 2] = ["definitions", "$defs"];

/// A schema declared under `definitions` or `$defs`, named after its pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
  pub pointer: String,
  pub type_name: TypeToken,
  pub namespace: Vec<String>,
  pub schema: Value,
}

pub struct DefinitionsCollector;

impl DefinitionsCollector {
  /// Every definition reachable through nested `definitions`/`$defs`, depth-first pre-order.
  pub fn collect(schema: &Value) -> Vec<Definition> {
    let mut definitions = Vec::new();
    Self::walk(schema, "#", &mut definitions);
    definitions
  }

  fn walk(node: &Value, pointer: &str, definitions: &mut Vec<Definition>) {
    for keyword in DEFINITION_KEYWORDS {
      let Some(entries) = node.get(keyword).and_then(Value::as_object) else {
        continue;
      };

      for (key, schema) in entries {
        let pointer = format!("{pointer}/{keyword}/{}", escape_pointer_token(key));
        if let Some((namespace, name)) = definition_path(&pointer) {
          definitions.push(Definition {
            pointer: pointer.clone(),
            type_name: TypeToken::new(name),
            namespace,
            schema: schema.clone(),
          });
        }
        Self::walk(schema, &pointer, definitions);
      }
    }
  }
}

/// Groups of local pointers (`#` for the root) that reference each other in a cycle.
pub(crate) fn reference_cycles(root: &Value, definitions: &[Definition]) -> Vec<Vec<String>> {
  let mut dependencies = BTreeMap::new();
  dependencies.insert("#".to_string(), local_references(root));
  for definition in definitions {
    dependencies.insert(definition.pointer.clone(), local_references(&definition.schema));
  }
  detect_cycles(&dependencies)
}

fn detect_cycles(dependencies: &BTreeMap<String, BTreeSet<String>>) -> Vec<Vec<String>> {
  let mut graph = DiGraphMap::<&str, ()>::new();
  for (node, deps) in dependencies {
    graph.add_node(node.as_str());
    for dep in deps {
      graph.add_edge(node.as_str(), dep.as_str(), ());
    }
  }

  kosaraju_scc(&graph)
    .into_iter()
    .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
    .map(|scc| {
      let mut cycle: Vec<String> = scc.into_iter().map(String::from).collect();
      cycle.sort();
      cycle
    })
    .collect()
}

/// Local `$ref` targets used by `node`, not descending into nested definitions.
fn local_references(node: &Value) -> BTreeSet<String> {
  let mut refs = BTreeSet::new();
  collect_references(node, &mut refs);
  refs
}

fn collect_references(node: &Value, refs: &mut BTreeSet<String>) {
  match node {
    Value::Object(entries) => {
      if let Some(reference) = node.reference()
        && (reference == "#" || reference.starts_with(LOCAL_POINTER_PREFIX))
      {
        refs.insert(reference.to_string());
      }
      for (key, child) in entries {
        if !DEFINITION_KEYWORDS.contains(&key.as_str()) {
          collect_references(child, refs);
        }
      }
    }
    Value::Array(items) => items.iter().for_each(|item| collect_references(item, refs)),
    _ => {}
  }
}
