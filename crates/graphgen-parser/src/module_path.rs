//! Import path resolution from the enclosing crate manifest.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ParseError, ParseResult};

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
    lib: Option<ManifestLib>,
}

#[derive(Debug, Deserialize)]
struct ManifestPackage {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ManifestLib {
    name: Option<String>,
}

/// Resolve the Rust import path of the module stored in `dir`.
///
/// Walks parent directories up to the first `Cargo.toml`, takes the crate
/// name from it and appends the directory segments below `src/`.
pub fn resolve_module_path(dir: &Path) -> ParseResult<String> {
    let dir = dir.canonicalize().map_err(|source| ParseError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut current = Some(dir.as_path());
    while let Some(candidate) = current {
        let manifest = candidate.join("Cargo.toml");
        if manifest.is_file() {
            debug!(manifest = %manifest.display(), "Found crate manifest");
            let crate_name = read_crate_name(&manifest)?;
            let segments = module_segments(&dir, candidate, &manifest)?;
            let mut path = vec![crate_name];
            path.extend(segments);
            return Ok(path.join("::"));
        }
        current = candidate.parent();
    }

    Err(ParseError::ManifestNotFound { dir })
}

fn read_crate_name(manifest: &Path) -> ParseResult<String> {
    let contents = std::fs::read_to_string(manifest).map_err(|source| ParseError::Io {
        path: manifest.to_path_buf(),
        source,
    })?;
    let parsed: Manifest = toml::from_str(&contents).map_err(|err| ParseError::InvalidManifest {
        path: manifest.to_path_buf(),
        message: err.to_string(),
    })?;

    let lib_name = parsed.lib.and_then(|lib| lib.name);
    let name = match (lib_name, parsed.package) {
        (Some(lib), _) => lib,
        (None, Some(package)) => package.name,
        (None, None) => {
            return Err(ParseError::InvalidManifest {
                path: manifest.to_path_buf(),
                message: "missing [package] section".to_string(),
            })
        }
    };
    Ok(name.replace('-', "_"))
}

fn module_segments(dir: &Path, crate_root: &Path, manifest: &Path) -> ParseResult<Vec<String>> {
    let outside = || ParseError::OutsideCrate {
        dir: dir.to_path_buf(),
        manifest: manifest.to_path_buf(),
    };

    let relative = dir.strip_prefix(crate_root).map_err(|_| outside())?;
    let mut components = relative.components().map(|c| match c {
        Component::Normal(part) => Ok(part.to_string_lossy().to_string()),
        _ => Err(outside()),
    });

    match components.next() {
        Some(Ok(first)) if first == "src" => {}
        _ => return Err(outside()),
    }

    components
        .map(|segment| segment.map(|s| s.replace('-', "_")))
        .collect()
}

/// Last segment of a module path.
pub fn package_name(module_path: &str) -> &str {
    module_path.rsplit("::").next().unwrap_or(module_path)
}

/// Canonical directory path for diagnostics.
pub fn display_dir(dir: &Path) -> PathBuf {
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}
