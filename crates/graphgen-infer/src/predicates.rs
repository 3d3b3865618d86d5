//! Effective predicate resolution.

use std::collections::BTreeMap;

use graphgen_core::Package;

use crate::error::{InferError, InferResult};

/// Set `effective_predicate` on every field and reject duplicates within an
/// entity.
pub fn resolve_predicates(package: &mut Package) -> InferResult<()> {
    for entity in &mut package.entities {
        let mut seen: BTreeMap<String, String> = BTreeMap::new();
        for field in &mut entity.fields {
            let predicate = field.resolve_predicate().to_string();
            if let Some(first) = seen.get(&predicate) {
                return Err(InferError::DuplicatePredicate {
                    entity: entity.name.clone(),
                    predicate,
                    first: first.clone(),
                    second: field.name.clone(),
                });
            }
            seen.insert(predicate.clone(), field.name.clone());
            field.effective_predicate = predicate;
        }
    }
    Ok(())
}
