//! Error types for the record parser.

use std::path::PathBuf;

use graphgen_core::DirectiveError;
use thiserror::Error;

/// Result type for parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that abort parsing before any model exists.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The package directory does not exist or is not a directory.
    #[error("package directory {path} does not exist")]
    DirectoryNotFound { path: PathBuf },

    /// A source file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to scan {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A source file is not valid Rust.
    #[error("{file}:{line}: syntax error: {message}")]
    Syntax {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// A field carries a malformed storage directive.
    #[error("{file}:{line}: invalid directive on {entity}.{field}: {source}")]
    Directive {
        file: PathBuf,
        line: usize,
        entity: String,
        field: String,
        #[source]
        source: DirectiveError,
    },

    /// A field attribute could not be interpreted.
    #[error("{file}:{line}: invalid attribute on {entity}.{field}: {message}")]
    Attribute {
        file: PathBuf,
        line: usize,
        entity: String,
        field: String,
        message: String,
    },

    /// No `Cargo.toml` above the package directory.
    #[error("no Cargo.toml found in {dir} or any parent directory")]
    ManifestNotFound { dir: PathBuf },

    /// The nearest `Cargo.toml` is not a valid package manifest.
    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// The package directory is not below the manifest's `src/` tree.
    #[error("{dir} is not a module directory of the crate at {manifest}")]
    OutsideCrate { dir: PathBuf, manifest: PathBuf },

    /// The directory declares no entity at all.
    #[error("no entities found in {dir}: an entity is a pub struct with `uid: String` and a `dgraph.type` Vec<String> field")]
    NoEntities { dir: PathBuf },
}
