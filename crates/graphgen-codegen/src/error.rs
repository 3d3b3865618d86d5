//! Error types for generation and golden verification.

use std::path::PathBuf;

use thiserror::Error;

use crate::template::{Scope, TemplateName};

/// Result type for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Result type for golden verification.
pub type GoldenResult<T> = Result<T, GoldenError>;

/// Errors that abort generation. None of them leave files behind.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A template failed to render.
    #[error("template `{template}` failed to render: {message}")]
    Template {
        template: TemplateName,
        message: String,
    },

    /// A template was handed input of the wrong scope.
    #[error("template `{template}` is {expected}-scoped but was given {actual} input")]
    ScopeMismatch {
        template: TemplateName,
        expected: Scope,
        actual: Scope,
    },

    /// The package has not been through inference.
    #[error("{entity}.{field} has no value kind; run inference before generating")]
    Uninferred { entity: String, field: String },

    /// An entity name clashes with a type or command the generated code declares.
    #[error("entity `{entity}` clashes with the generated `{reserved}`; rename the record type")]
    ReservedName {
        entity: String,
        reserved: &'static str,
    },

    /// Two artifacts would be written to the same file.
    #[error("{first} and {second} would both be written to {key}")]
    PathCollision {
        key: String,
        first: String,
        second: String,
    },

    /// Writing an artifact failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading or replacing reference files.
///
/// A mismatch is not an error; it is reported in the `GoldenReport`.
#[derive(Debug, Error)]
pub enum GoldenError {
    #[error("failed to access reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan reference directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
