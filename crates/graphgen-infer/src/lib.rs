//! Relationship inference for graphgen.
//!
//! [`infer`] annotates a parsed [`Package`] in fixed pass order:
//!
//! 1. [`classify`]: value kind of every field, edges by entity name
//! 2. [`predicates`]: effective storage predicate, duplicates rejected
//! 3. [`reverse`]: reverse edges paired with their forward field or marked managed
//! 4. [`directives`]: companion type hints required by index kinds
//! 5. [`search`]: the search field of each searchable entity
//!
//! Passes run on a working copy; the caller's package is only replaced once
//! every pass has succeeded.

pub mod classify;
pub mod directives;
mod error;
pub mod predicates;
pub mod reverse;
pub mod search;

use graphgen_core::Package;
use tracing::info;

pub use error::{InferError, InferResult};

/// Run every inference pass over `package`.
///
/// On error `package` is left exactly as it was passed in.
pub fn infer(package: &mut Package) -> InferResult<()> {
    let mut working = package.clone();

    classify::classify(&mut working);
    predicates::resolve_predicates(&mut working)?;
    reverse::pair_reverse_edges(&mut working)?;
    directives::infer_directives(&mut working)?;
    search::determine_search(&mut working);

    let managed = working
        .entities
        .iter()
        .flat_map(|e| e.managed_reverse_fields())
        .count();
    let searchable = working.entities.iter().filter(|e| e.searchable).count();
    info!(
        package = %working.name,
        entities = working.entities.len(),
        searchable,
        managed_reverse = managed,
        "Inference complete"
    );

    *package = working;
    Ok(())
}
