//! Reverse-edge pairing.
//!
//! A field whose effective predicate starts with `~` exposes the inverse of a
//! forward edge stored under the stripped predicate. When the related entity
//! declares that forward field the two are paired; otherwise the reverse edge
//! is *managed*: the generated client links every child back to the parent
//! when the parent is added.

use graphgen_core::{Entity, Field, IndexKind, Package, ReverseEdge, REVERSE_SIGIL};
use tracing::debug;

use crate::error::{InferError, InferResult};

/// Resolve the pairing state of every reverse edge.
pub fn pair_reverse_edges(package: &mut Package) -> InferResult<()> {
    let mut resolved = Vec::new();
    for (entity_idx, entity) in package.entities.iter().enumerate() {
        for (field_idx, field) in entity.fields.iter().enumerate() {
            let Some(stripped) = field.effective_predicate.strip_prefix(REVERSE_SIGIL) else {
                continue;
            };
            let edge = resolve(package, entity, field, stripped)?;
            debug!(entity = %entity.name, field = %field.name, ?edge, "Resolved reverse edge");
            resolved.push((entity_idx, field_idx, edge));
        }
    }

    for (entity_idx, field_idx, edge) in resolved {
        package.entities[entity_idx].fields[field_idx].reverse = Some(edge);
    }
    Ok(())
}

fn resolve(
    package: &Package,
    entity: &Entity,
    field: &Field,
    stripped: &str,
) -> InferResult<ReverseEdge> {
    let unresolvable = || InferError::UnresolvableReverse {
        entity: entity.name.clone(),
        field: field.name.clone(),
        predicate: field.effective_predicate.clone(),
        ty: field.ty.rendered.clone(),
    };

    if stripped.is_empty() {
        return Err(unresolvable());
    }
    let target_name = field.kind.target().ok_or_else(unresolvable)?;
    let target = package.entity(target_name).ok_or_else(unresolvable)?;

    let Some(forward) = target.field_by_predicate(stripped) else {
        return Ok(ReverseEdge::Managed {
            target: target_name.to_string(),
            forward_predicate: stripped.to_string(),
        });
    };

    match forward.kind.target() {
        None => {
            return Err(InferError::ForwardNotEdge {
                entity: entity.name.clone(),
                field: field.name.clone(),
                predicate: stripped.to_string(),
                target: target.name.clone(),
                forward: forward.name.clone(),
                kind: forward.kind.label(),
            })
        }
        Some(actual) if actual != entity.name => {
            return Err(InferError::ReverseTargetMismatch {
                entity: entity.name.clone(),
                field: field.name.clone(),
                target: target.name.clone(),
                forward: forward.name.clone(),
                actual: actual.to_string(),
            })
        }
        Some(_) => {}
    }

    if !forward.directives.reverse {
        return Err(InferError::ForwardMissingReverseFlag {
            entity: entity.name.clone(),
            field: field.name.clone(),
            target: target.name.clone(),
            forward: forward.name.clone(),
        });
    }

    let reverse_index = &field.directives.index;
    let forward_index = &forward.directives.index;
    if !reverse_index.is_empty() && !forward_index.is_empty() && reverse_index != forward_index {
        return Err(InferError::IncompatibleReverseIndex {
            entity: entity.name.clone(),
            field: field.name.clone(),
            target: target.name.clone(),
            forward_field: forward.name.clone(),
            reverse: join_index(reverse_index),
            forward: join_index(forward_index),
        });
    }

    Ok(ReverseEdge::Paired {
        entity: target.name.clone(),
        field: forward.name.clone(),
    })
}

fn join_index(kinds: &[IndexKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
