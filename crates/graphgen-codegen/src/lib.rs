//! Template generator for graphgen.
//!
//! [`Generator`] turns an inferred [`graphgen_core::Package`] into a set of
//! [`Artifact`]s: a package-wide client, paging helpers, an iterator, three
//! files per entity (client, functional options, query builder) and an
//! optional command-line surface. Rendering happens entirely in memory; files
//! are written only after every template rendered successfully.
//!
//! The [`golden`] module compares a run's artifacts with committed reference
//! output.

mod error;
mod generator;
pub mod golden;
mod render;
mod template;
mod tidy;
pub mod view;

pub use error::{GenerateError, GenerateResult, GoldenError, GoldenResult};
pub use generator::{write_artifacts, Artifact, Generator};
pub use golden::{GoldenHarness, GoldenReport, LineDiff, Mismatch};
pub use render::{AskamaRenderer, RenderInput, Renderer};
pub use template::{Scope, TemplateName};
pub use tidy::tidy;
