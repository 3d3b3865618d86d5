//! Searchability determination.

use graphgen_core::{Entity, IndexKind, Package, SearchFunction, SearchIndex};
use tracing::debug;

/// Mark entities searchable on their first text-indexed scalar field.
pub fn determine_search(package: &mut Package) {
    for entity in &mut package.entities {
        let search = search_index(entity);
        if let Some(search) = &search {
            debug!(entity = %entity.name, field = %search.field, function = search.function.dql_name(), "Entity is searchable");
        }
        entity.searchable = search.is_some();
        entity.search = search;
    }
}

/// Full-text beats term when one field declares both.
fn search_index(entity: &Entity) -> Option<SearchIndex> {
    entity
        .fields
        .iter()
        .filter(|field| field.kind.is_scalar())
        .find_map(|field| {
            let index = &field.directives.index;
            let function = if index.contains(&IndexKind::Fulltext) {
                SearchFunction::AllOfText
            } else {
                SearchFunction::for_index(field.directives.text_search_index()?)?
            };
            Some(SearchIndex {
                field: field.name.clone(),
                predicate: field.effective_predicate.clone(),
                function,
            })
        })
}
