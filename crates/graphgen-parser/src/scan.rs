//! Source file enumeration.

use std::path::{Path, PathBuf};

use graphgen_core::GENERATED_MARKER;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ParseError, ParseResult};

/// A source file selected for parsing.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name relative to the package directory.
    pub name: String,
    pub contents: String,
}

impl SourceFile {
    /// Whether this file is the module root (`mod.rs`, `lib.rs` or `main.rs`).
    pub fn is_module_root(&self) -> bool {
        matches!(self.name.as_str(), "mod.rs" | "lib.rs" | "main.rs")
    }

    /// Module name of a non-root file (`film.rs` -> `film`).
    pub fn module_name(&self) -> &str {
        self.name.strip_suffix(".rs").unwrap_or(&self.name)
    }
}

/// Whether `contents` was produced by a previous generation run.
pub fn is_generated(contents: &str) -> bool {
    contents
        .trim_start_matches('\u{feff}')
        .lines()
        .next()
        .is_some_and(|line| line.trim_end() == GENERATED_MARKER)
}

/// Read every `.rs` file directly inside `dir`, sorted by file name.
///
/// Generated files and hidden files are skipped.
pub fn scan_directory(dir: &Path) -> ParseResult<Vec<SourceFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ParseError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || is_hidden(&entry) || !is_rust_source(&entry) {
            continue;
        }

        let path = entry.path().to_path_buf();
        let contents = std::fs::read_to_string(&path).map_err(|source| ParseError::Io {
            path: path.clone(),
            source,
        })?;
        if is_generated(&contents) {
            debug!(file = %path.display(), "Skipping generated file");
            continue;
        }

        files.push(SourceFile {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            contents,
        });
    }

    Ok(files)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn is_rust_source(entry: &walkdir::DirEntry) -> bool {
    entry.path().extension().and_then(|e| e.to_str()) == Some("rs")
}
