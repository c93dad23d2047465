//! Orchestration of one generation run: definitions first, then the root, then one rendered
//! file per namespace.

use std::{
  collections::{BTreeMap, BTreeSet},
  path::PathBuf,
  sync::Arc,
};

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
  generator::{
    assembler::{ClassAssembler, ResolvedField, assemble_entry, assemble_enum, assemble_union},
    ast::{Documentation, FileUnit, TypePath, TypeToken, TypeUnit},
    codegen::file::FileGenerator,
    definitions::{Definition, DefinitionsCollector, reference_cycles},
    errors::{GeneratorError, GeneratorResult, ResolutionError},
    hooks::Hooks,
    metrics::{GenerationStats, GenerationWarning},
    naming::identifiers::{module_file_stem, to_rust_type_name},
    property::{
      EnumTarget, MintedType, PropertyContract, PropertyResolver, enums::resolve_enum, intersection::merge_all_of,
    },
    reference::{ReferencedType, SchemaLookup},
    request::{GeneratorOptions, GeneratorRequest},
  },
  utils::SchemaExt,
};

const MODULE_FILE: &str = "mod.rs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  /// Relative to the output directory.
  pub path: PathBuf,
  pub contents: String,
}

/// A generated type and the file it is emitted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSummary {
  pub path: TypePath,
  pub kind: &'static str,
  pub file: PathBuf,
}

#[derive(Debug)]
pub struct GeneratedOutput {
  pub files: Vec<GeneratedFile>,
  /// Types grouped by file, in emission order within each file.
  pub types: Vec<TypeSummary>,
  pub stats: GenerationStats,
}

impl GeneratedOutput {
  pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
    self.files.iter().find(|file| file.path == PathBuf::from(path))
  }
}

pub struct Orchestrator {
  schema: Arc<Value>,
  root_name: TypeToken,
  options: GeneratorOptions,
  external: Vec<(String, TypePath)>,
  hooks: Hooks,
  source_path: String,
}

impl Orchestrator {
  /// `root_name` names the struct generated for the document root; it is converted to a
  /// `PascalCase` type name.
  pub fn new(schema: Value, root_name: &str, options: GeneratorOptions) -> Self {
    Self {
      schema: Arc::new(schema),
      root_name: TypeToken::new(to_rust_type_name(root_name)),
      options,
      external: Vec::new(),
      hooks: Hooks::default(),
      source_path: String::new(),
    }
  }

  /// Maps a `$ref` target to a type generated elsewhere. Mapped definitions are not generated.
  #[must_use]
  pub fn with_reference(mut self, pointer: impl Into<String>, path: TypePath) -> Self {
    self.external.push((pointer.into(), path));
    self
  }

  #[must_use]
  pub fn with_hooks(mut self, hooks: Hooks) -> Self {
    self.hooks = hooks;
    self
  }

  /// Source shown in the header of every generated file.
  #[must_use]
  pub fn with_source_path(mut self, source_path: impl Into<String>) -> Self {
    self.source_path = source_path.into();
    self
  }

  /// Runs the pipeline: collect definitions, detect reference cycles, realize every
  /// definition, realize the root, group the units per namespace and render them.
  pub fn generate(&self) -> GeneratorResult<GeneratedOutput> {
    let mut stats = GenerationStats::default();

    let definitions = DefinitionsCollector::collect(&self.schema);
    stats.record_definitions(definitions.len());
    let cycles = reference_cycles(&self.schema, &definitions);

    let root_request = self.root_request(&definitions, &cycles);
    stats.record_cycles(cycles);

    let mut realizer = Realizer {
      root: &self.schema,
      hooks: &self.hooks,
      units: IndexMap::new(),
      stats: &mut stats,
    };

    for definition in &definitions {
      if let Some(request) = self.definition_request(&root_request, definition) {
        realizer.realize(&request)?;
      }
    }
    if is_realizable_root(&self.schema, definitions.is_empty()) {
      realizer.realize(&root_request)?;
    }

    let units: Vec<TypeUnit> = realizer.units.into_values().map(|(_, unit)| unit).collect();
    let (files, types) = self.render_files(units, &mut stats)?;
    Ok(GeneratedOutput { files, types, stats })
  }

  fn root_request(&self, definitions: &[Definition], cycles: &[Vec<String>]) -> GeneratorRequest {
    let module_root = &self.options.module_root;
    let root_path = TypePath::new(module_root, &[], self.root_name.clone());
    let mut lookup = SchemaLookup::new(Arc::clone(&self.schema), root_path).with_cycles(cycles);
    for definition in definitions {
      let path = TypePath::new(module_root, &definition.namespace, definition.type_name.clone());
      lookup = lookup.with_definition(
        &definition.pointer,
        path,
        &definition.schema,
        self.options.enums_supported,
      );
    }
    for (pointer, path) in &self.external {
      lookup = lookup.with_external(pointer.clone(), path.clone());
    }

    GeneratorRequest::new(
      (*self.schema).clone(),
      self.root_name.clone(),
      self.options.clone(),
      lookup,
    )
  }

  /// Definitions are realized only when references to them resolve to the generated type.
  fn definition_request(&self, root: &GeneratorRequest, definition: &Definition) -> Option<GeneratorRequest> {
    let expected = TypePath::new(
      &self.options.module_root,
      &definition.namespace,
      definition.type_name.clone(),
    );
    match root.lookup().lookup_reference(&definition.pointer) {
      ReferencedType::Class { path, .. } | ReferencedType::Enum { path, .. } if path == expected => Some(
        root
          .with_schema(definition.schema.clone())
          .with_class(definition.type_name.clone())
          .with_namespace(definition.namespace.clone())
          .with_pointer(&definition.pointer),
      ),
      _ => None,
    }
  }

  fn render_files(
    &self,
    units: Vec<TypeUnit>,
    stats: &mut GenerationStats,
  ) -> GeneratorResult<(Vec<GeneratedFile>, Vec<TypeSummary>)> {
    let root_depth = self.options.module_root.len();
    let mut namespaces: BTreeMap<Vec<String>, Vec<TypeUnit>> = BTreeMap::new();
    namespaces.entry(Vec::new()).or_default();

    for unit in units {
      let namespace = unit.path().modules().get(root_depth..).unwrap_or_default().to_vec();
      stats.record_type(&unit);
      for depth in 0..namespace.len() {
        namespaces.entry(namespace[..depth].to_vec()).or_default();
      }
      namespaces.entry(namespace).or_default().push(unit);
    }

    let mut children: BTreeMap<Vec<String>, BTreeSet<String>> = BTreeMap::new();
    for namespace in namespaces.keys() {
      if let Some((child, parent)) = namespace.split_last() {
        children.entry(parent.to_vec()).or_default().insert(child.clone());
      }
    }

    let mut files = Vec::with_capacity(namespaces.len());
    let mut summaries = Vec::new();
    for (namespace, types) in namespaces {
      let submodules = children.get(&namespace).map(|c| c.iter().cloned().collect()).unwrap_or_default();
      let mut file = FileUnit::builder()
        .path(module_path(&namespace))
        .namespace(namespace)
        .submodules(submodules)
        .types(types)
        .build();
      self.hooks.apply_file(&mut file);
      summaries.extend(file.types().iter().map(|unit| TypeSummary {
        path: unit.path().clone(),
        kind: unit.kind(),
        file: file.path().clone(),
      }));

      let contents = FileGenerator::new(&file, &self.source_path).generate()?;
      stats.record_file();
      files.push(GeneratedFile {
        path: file.path().clone(),
        contents,
      });
    }
    Ok((files, summaries))
  }
}

fn module_path(namespace: &[String]) -> PathBuf {
  let mut path: PathBuf = namespace.iter().map(|module| module_file_stem(module)).collect();
  path.push(MODULE_FILE);
  path
}

/// A root that only carries definitions produces no struct of its own.
fn is_realizable_root(schema: &Value, has_no_definitions: bool) -> bool {
  has_no_definitions
    || schema.is_object_shaped()
    || schema.all_of().is_some()
    || schema.enum_values().is_some()
}

struct Realizer<'a> {
  root: &'a Value,
  hooks: &'a Hooks,
  /// Keyed by type path; a later unit with the same path replaces the earlier one.
  units: IndexMap<TypePath, (String, TypeUnit)>,
  stats: &'a mut GenerationStats,
}

impl Realizer<'_> {
  fn realize(&mut self, request: &GeneratorRequest) -> GeneratorResult<()> {
    if request.depth_exceeded() {
      return Err(GeneratorError::resolution(
        request.pointer(),
        ResolutionError::DepthExceeded {
          max_depth: request.options().max_depth,
        },
      ));
    }

    let schema = request.schema();
    if schema.enum_values().is_some() {
      let definition = resolve_enum(schema, request.options().enums_supported)
        .map_err(|kind| GeneratorError::enumeration(request.pointer(), kind))?;
      let target = EnumTarget {
        path: request.type_path(),
        definition,
        docs: Documentation::from_schema(schema.title(), schema.description()),
      };
      self.realize_enum(&target, request.pointer());
      return Ok(());
    }

    let request = if schema.all_of().is_some() {
      request.with_schema(merge_all_of(schema, request, request.pointer())?)
    } else {
      request.clone()
    };
    let schema = request.schema();
    if !schema.is_object_shaped() {
      return Err(GeneratorError::resolution(
        request.pointer(),
        ResolutionError::NotObjectShaped,
      ));
    }

    let resolver = PropertyResolver::new(&request);
    let required = schema.required_keys();
    let mut fields = Vec::new();
    for (key, node) in schema.properties().into_iter().flatten() {
      let property = resolver.resolve(key, node, required.contains(&key.as_str()))?;
      if let Some(default) = property.ignored_default() {
        self.stats.record_warning(GenerationWarning::DefaultIgnored {
          pointer: request.child_pointer(&["properties", key]),
          default: default.to_string(),
        });
      }
      fields.push(ResolvedField { key, node, property });
    }

    let mut unit = ClassAssembler::new(&request, schema, self.root).assemble(&fields);
    self.hooks.apply_class(&mut unit);
    self.insert(request.pointer(), TypeUnit::Class(unit));

    for field in &fields {
      for minted in field.property.contract().minted_types() {
        self.realize_minted(minted, request.pointer())?;
      }
    }
    Ok(())
  }

  fn realize_minted(&mut self, minted: MintedType, pointer: &str) -> GeneratorResult<()> {
    match minted {
      MintedType::Class(request) => self.realize(&request),
      MintedType::Enum(target) => {
        self.realize_enum(&target, pointer);
        Ok(())
      }
      MintedType::Union(union) => {
        let mut unit = assemble_union(&union);
        self.hooks.apply_union(&mut unit);
        self.insert(pointer, TypeUnit::Union(unit));
        for alternative in union.alternatives {
          for minted in alternative.property.minted_types() {
            self.realize_minted(minted, pointer)?;
          }
        }
        Ok(())
      }
      MintedType::Dynamic(dynamic) => {
        let mut unit = assemble_entry(&dynamic);
        self.hooks.apply_union(&mut unit);
        self.insert(pointer, TypeUnit::Union(unit));
        for branch in dynamic.branches {
          for minted in branch.property.minted_types() {
            self.realize_minted(minted, pointer)?;
          }
        }
        Ok(())
      }
    }
  }

  fn realize_enum(&mut self, target: &EnumTarget, pointer: &str) {
    let mut unit = assemble_enum(target);
    self.hooks.apply_enum(&mut unit);
    self.insert(pointer, TypeUnit::Enum(unit));
  }

  fn insert(&mut self, pointer: &str, unit: TypeUnit) {
    let path = unit.path().clone();
    if self.units.insert(path.clone(), (pointer.to_string(), unit)).is_some() {
      self.stats.record_warning(GenerationWarning::TypeNameCollision {
        path: path.to_string(),
        pointer: pointer.to_string(),
      });
    }
  }
}
