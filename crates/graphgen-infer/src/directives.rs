//! Companion type-hint inference.

use graphgen_core::{Field, IndexKind, Package, TypeHint};
use tracing::debug;

use crate::error::{InferError, InferResult};

/// Fill in the type hint an index requires when none is declared.
pub fn infer_directives(package: &mut Package) -> InferResult<()> {
    for entity in &mut package.entities {
        for field in &mut entity.fields {
            infer_field(&entity.name, field)?;
        }
    }
    Ok(())
}

fn infer_field(entity: &str, field: &mut Field) -> InferResult<()> {
    let mut required: Option<(IndexKind, TypeHint)> = None;
    for kind in &field.directives.index {
        let Some(hint) = kind.companion_type() else {
            continue;
        };
        match required {
            Some((first, first_hint)) if first_hint != hint => {
                return Err(InferError::ConflictingInferredHints {
                    entity: entity.to_string(),
                    field: field.name.clone(),
                    first,
                    first_hint,
                    second: *kind,
                    second_hint: hint,
                });
            }
            Some(_) => {}
            None => required = Some((*kind, hint)),
        }
    }

    let Some((index, inferred)) = required else {
        return Ok(());
    };

    match field.directives.type_hint {
        Some(declared) if declared != inferred => Err(InferError::ConflictingTypeHint {
            entity: entity.to_string(),
            field: field.name.clone(),
            index,
            declared,
            inferred,
        }),
        Some(_) => Ok(()),
        None => {
            debug!(entity, field = %field.name, hint = %inferred, "Inferred type hint");
            field.directives.type_hint = Some(inferred);
            field.directives.type_inferred = true;
            Ok(())
        }
    }
}
