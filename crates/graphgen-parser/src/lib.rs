//! Record parser for graphgen.
//!
//! Reads one directory of Rust sources and produces the intermediate
//! [`Package`] model: the package's import path, its entities in file-name
//! then declaration order, the `use` aliases of the scanned files and the set
//! of locally declared types. Nothing is classified here; that is the job of
//! `graphgen-infer`.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let package = graphgen_parser::parse(Path::new("src/movies"))?;
//! println!("{} entities in {}", package.entities.len(), package.module_path);
//! # Ok::<(), graphgen_parser::ParseError>(())
//! ```

mod error;
pub mod imports;
pub mod module_path;
pub mod record;
pub mod scan;
pub mod types;

use std::path::Path;

use graphgen_core::Package;
use tracing::{debug, info};

pub use error::{ParseError, ParseResult};
pub use scan::SourceFile;

use crate::imports::{collect_imports, merge_imports, FileRole};
use crate::module_path::{display_dir, package_name, resolve_module_path};
use crate::record::extract_records;

/// Parse the record declarations in `dir`.
pub fn parse(dir: &Path) -> ParseResult<Package> {
    if !dir.is_dir() {
        return Err(ParseError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let module_path = resolve_module_path(dir)?;
    let files = scan::scan_directory(dir)?;
    debug!(dir = %dir.display(), files = files.len(), "Scanned package directory");

    let mut package = Package {
        name: package_name(&module_path).to_string(),
        module_path,
        ..Package::default()
    };

    for source in &files {
        let syntax = syn::parse_file(&source.contents).map_err(|err| ParseError::Syntax {
            file: source.path.clone(),
            line: err.span().start().line,
            message: err.to_string(),
        })?;

        let role = if source.is_module_root() {
            FileRole::ModuleRoot
        } else {
            FileRole::Child(source.module_name())
        };
        merge_imports(&mut package.imports, collect_imports(&syntax, role));

        let records = extract_records(source, &syntax)?;
        package.local_types.extend(records.local_types);
        package.entities.extend(records.entities);
    }

    if package.entities.is_empty() {
        return Err(ParseError::NoEntities {
            dir: display_dir(dir),
        });
    }

    info!(
        package = %package.name,
        module = %package.module_path,
        entities = package.entities.len(),
        "Parsed package"
    );
    Ok(package)
}
