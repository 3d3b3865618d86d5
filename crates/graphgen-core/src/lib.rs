//! Core domain types shared across the graphgen workspace.
//!
//! The [`Package`] model is produced by `graphgen-parser`, annotated in place
//! by `graphgen-infer` and consumed read-only by `graphgen-codegen`. Storage
//! directives attached to fields are parsed by the [`directive`] grammar into
//! a typed [`DirectiveSet`].

pub mod config;
pub mod directive;
mod error;
pub mod model;
pub mod naming;

pub use config::{ConfigOverrides, GenerateConfig, CONFIG_FILE_NAME, DEFAULT_RUNTIME_CRATE};
pub use directive::{DirectiveSet, HnswParams, IndexKind, TypeHint, VectorMetric};
pub use error::{ConfigError, ConfigResult, DirectiveError, DirectiveResult};
pub use model::{
    Entity, Field, Identity, Package, ReverseEdge, ScalarKind, SearchFunction, SearchIndex,
    TypeRef, ValueKind, Wrapper,
};

/// First line of every generated artifact.
///
/// The parser skips files that start with this line so that a second run
/// never re-reads its own output.
pub const GENERATED_MARKER: &str = "// Code generated by graphgen. DO NOT EDIT.";

/// Serialization name of the identifier field every entity carries.
pub const UID_SERIALIZED_NAME: &str = "uid";

/// Serialization name of the type-label field every entity carries.
pub const DGRAPH_TYPE_SERIALIZED_NAME: &str = "dgraph.type";

/// Prefix marking a predicate as the inverse of a forward edge.
pub const REVERSE_SIGIL: char = '~';
