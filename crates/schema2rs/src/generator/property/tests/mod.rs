mod intersection;

use std::sync::Arc;

use serde_json::Value;

use crate::generator::{
  ast::{TypePath, TypeToken},
  definitions::DefinitionsCollector,
  reference::SchemaLookup,
  request::{GeneratorOptions, GeneratorRequest},
};

pub(super) fn request_for(schema: Value) -> GeneratorRequest {
  request_with(schema, GeneratorOptions::default())
}

pub(super) fn request_with(schema: Value, options: GeneratorOptions) -> GeneratorRequest {
  let root_path = TypePath::new(&options.module_root, &[], TypeToken::new("Root"));
  let mut lookup = SchemaLookup::new(Arc::new(schema.clone()), root_path);
  for definition in DefinitionsCollector::collect(&schema) {
    let path = TypePath::new(&options.module_root, &definition.namespace, definition.type_name.clone());
    lookup = lookup.with_definition(&definition.pointer, path, &definition.schema, options.enums_supported);
  }
  GeneratorRequest::new(schema, TypeToken::new("Root"), options, lookup)
}
