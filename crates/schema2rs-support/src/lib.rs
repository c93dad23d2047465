//! Runtime support for code generated by `schema2rs`.
//!
//! Generated types only depend on this crate: the JSON model, the map type used for
//! `additionalProperties` and the date-time type are re-exported so generated modules
//! can refer to them through a single path.

pub use chrono;
pub use indexmap;
pub use serde;
pub use serde_json;

pub mod decode;
pub mod encode;
mod error;
mod number;
mod validate;

pub use error::ValidationError;
pub use number::Number;
pub use validate::{validate, validate_property};

/// Date-time representation used for `format: date-time` strings.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Map representation used for `additionalProperties` / `patternProperties` shapes.
pub type Map<V> = indexmap::IndexMap<String, V>;
