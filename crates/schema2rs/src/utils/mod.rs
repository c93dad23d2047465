pub mod loader;
pub mod schema_ext;


pub(crate) use schema_ext::SchemaExt;
