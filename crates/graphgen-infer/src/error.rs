//! Error types for the inference passes.

use graphgen_core::{IndexKind, TypeHint};
use thiserror::Error;

/// Result type for inference.
pub type InferResult<T> = Result<T, InferError>;

/// Errors that abort inference. Every variant names the entity and field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferError {
    /// Two fields of one entity resolve to the same storage predicate.
    #[error("{entity}: fields `{first}` and `{second}` both resolve to predicate `{predicate}`")]
    DuplicatePredicate {
        entity: String,
        predicate: String,
        first: String,
        second: String,
    },

    /// A reverse predicate sits on a field that does not reference an entity.
    #[error("{entity}.{field}: unresolvable reverse edge `{predicate}`: field type `{ty}` is not an entity reference")]
    UnresolvableReverse {
        entity: String,
        field: String,
        predicate: String,
        ty: String,
    },

    /// The forward counterpart of a reverse edge is not an edge.
    #[error("{entity}.{field}: forward predicate `{predicate}` on {target}.{forward} is a {kind} field, not an edge")]
    ForwardNotEdge {
        entity: String,
        field: String,
        predicate: String,
        target: String,
        forward: String,
        kind: &'static str,
    },

    /// The forward counterpart points at a different entity.
    #[error("{entity}.{field}: forward edge {target}.{forward} references `{actual}`, expected `{entity}`")]
    ReverseTargetMismatch {
        entity: String,
        field: String,
        target: String,
        forward: String,
        actual: String,
    },

    /// The forward counterpart does not declare the `reverse` directive.
    #[error("{entity}.{field}: forward edge {target}.{forward} must declare the `reverse` directive")]
    ForwardMissingReverseFlag {
        entity: String,
        field: String,
        target: String,
        forward: String,
    },

    /// The two sides of a reverse edge declare different index kinds.
    #[error("{entity}.{field}: index `{reverse}` differs from `{forward}` on forward edge {target}.{forward_field}")]
    IncompatibleReverseIndex {
        entity: String,
        field: String,
        target: String,
        forward_field: String,
        reverse: String,
        forward: String,
    },

    /// An explicit type hint contradicts the hint an index requires.
    #[error("{entity}.{field}: index `{index}` requires type `{inferred}`, but type `{declared}` is declared")]
    ConflictingTypeHint {
        entity: String,
        field: String,
        index: IndexKind,
        declared: TypeHint,
        inferred: TypeHint,
    },

    /// Two declared indexes require different type hints.
    #[error("{entity}.{field}: index `{first}` requires type `{first_hint}` but index `{second}` requires `{second_hint}`")]
    ConflictingInferredHints {
        entity: String,
        field: String,
        first: IndexKind,
        first_hint: TypeHint,
        second: IndexKind,
        second_hint: TypeHint,
    },
}

impl InferError {
    /// Entity the error is reported against.
    pub fn entity(&self) -> &str {
        match self {
            InferError::DuplicatePredicate { entity, .. }
            | InferError::UnresolvableReverse { entity, .. }
            | InferError::ForwardNotEdge { entity, .. }
            | InferError::ReverseTargetMismatch { entity, .. }
            | InferError::ForwardMissingReverseFlag { entity, .. }
            | InferError::IncompatibleReverseIndex { entity, .. }
            | InferError::ConflictingTypeHint { entity, .. }
            | InferError::ConflictingInferredHints { entity, .. } => entity,
        }
    }
}
