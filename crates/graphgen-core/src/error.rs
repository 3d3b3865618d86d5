//! Error types for the core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for directive parsing.
pub type DirectiveResult<T> = Result<T, DirectiveError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while tokenizing or parsing a `#[dgraph("...")]` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// A character that cannot start any token.
    #[error("unexpected character `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    /// A quoted string without its closing quote.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A parameter list without its closing parenthesis.
    #[error("unterminated parameter list for index `{index}`")]
    UnterminatedParams { index: String },

    /// A token that is valid on its own but not at this position.
    #[error("unexpected `{found}` at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    /// A directive key the grammar does not know.
    #[error("unknown directive `{key}`")]
    UnknownKey { key: String },

    /// A `key=` directive with nothing after the `=`.
    #[error("directive `{key}` requires a value")]
    MissingValue { key: String },

    /// A directive given twice in the same string.
    #[error("directive `{key}` is given more than once")]
    DuplicateKey { key: String },

    /// An index kind the storage engine does not support.
    #[error("unknown index kind `{name}`")]
    UnknownIndex { name: String },

    /// A type hint the storage engine does not support.
    #[error("unknown type hint `{name}`")]
    UnknownType { name: String },

    /// A similarity metric the storage engine does not support.
    #[error("unknown similarity metric `{name}`")]
    UnknownMetric { name: String },

    /// A parameter that the index kind does not accept.
    #[error("index `{index}` does not accept parameter `{name}`")]
    UnknownParam { index: String, name: String },

    /// A parameter whose value cannot be used.
    #[error("invalid value `{value}` for parameter `{name}`")]
    InvalidParam { name: String, value: String },
}

/// Errors raised while loading a `graphgen.toml` file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::GenerateConfig`].
    #[error("invalid configuration in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value that parses but cannot be honored.
    #[error("configuration error: {0}")]
    Invalid(String),
}
