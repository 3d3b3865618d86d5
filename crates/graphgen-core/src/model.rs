//! The intermediate model passed between parser, inference and generator.
//!
//! Entities reference each other by name only, so self-referential and
//! mutually referential record types need no special handling.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::directive::{DirectiveSet, IndexKind};
use crate::REVERSE_SIGIL;

// =============================================================================
// Package
// =============================================================================

/// One parsed directory of record declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Module name (last segment of `module_path`).
    pub name: String,
    /// Rust import path of the module, e.g. `movies_project::movies`.
    pub module_path: String,
    /// Entities in file-name then declaration order.
    pub entities: Vec<Entity>,
    /// `use` aliases of the scanned files, rebased for a child module.
    pub imports: BTreeMap<String, String>,
    /// Every type declared in the directory, entity or not.
    pub local_types: BTreeSet<String>,
    /// Display name of the generated command surface.
    pub cli_name: Option<String>,
    /// Wire validation hooks into the generated command surface.
    pub with_validator: bool,
}

impl Package {
    /// Look up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Whether `name` is an entity of this package.
    pub fn is_entity(&self, name: &str) -> bool {
        self.entity(name).is_some()
    }

    /// Name shown by the command surface.
    pub fn cli_display_name(&self) -> &str {
        self.cli_name.as_deref().unwrap_or(&self.name)
    }
}

// =============================================================================
// Entity
// =============================================================================

/// Rust identifiers of the two identity fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Field serialized as `uid`.
    pub uid: String,
    /// Field serialized as `dgraph.type`.
    pub dgraph_type: String,
}

/// A record type recognized as a graph node type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub identity: Identity,
    /// Data and edge fields in declaration order. Identity fields excluded.
    pub fields: Vec<Field>,
    pub searchable: bool,
    pub search: Option<SearchIndex>,
    /// Source file the entity was declared in, relative to the package dir.
    pub file: String,
    /// 1-based line of the declaration.
    pub line: usize,
}

impl Entity {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field whose effective predicate equals `predicate`.
    pub fn field_by_predicate(&self, predicate: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.effective_predicate == predicate)
    }

    /// Reverse edges the runtime client must synthesize on write.
    pub fn managed_reverse_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_managed_reverse())
    }
}

/// Text-search function used by a searchable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchFunction {
    /// Full-text match (`fulltext` index).
    AllOfText,
    /// Term match (`term` index).
    AnyOfTerms,
}

impl SearchFunction {
    /// Name of the query-language function.
    pub fn dql_name(&self) -> &'static str {
        match self {
            SearchFunction::AllOfText => "alloftext",
            SearchFunction::AnyOfTerms => "anyofterms",
        }
    }

    pub fn for_index(kind: &IndexKind) -> Option<Self> {
        match kind {
            IndexKind::Fulltext => Some(SearchFunction::AllOfText),
            IndexKind::Term => Some(SearchFunction::AnyOfTerms),
            _ => None,
        }
    }
}

/// The field chosen for an entity's dedicated search operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub field: String,
    pub predicate: String,
    pub function: SearchFunction,
}

// =============================================================================
// Field
// =============================================================================

/// Container wrappers peeled off a field type, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wrapper {
    Option,
    Box,
    Vec,
}

/// A field's type as written in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Full type text, e.g. `Option<Box<Director>>`.
    pub rendered: String,
    /// `Option`/`Box`/`Vec` wrappers around the base type.
    pub wrappers: Vec<Wrapper>,
    /// Last path segment of the innermost type, e.g. `Director`.
    pub base: String,
    /// Innermost type text including its path and arguments.
    pub inner: String,
    /// First segment of every path mentioned in the type, deduplicated.
    pub roots: Vec<String>,
}

impl TypeRef {
    pub fn is_list(&self) -> bool {
        self.wrappers.contains(&Wrapper::Vec)
    }

    pub fn is_optional(&self) -> bool {
        self.wrappers.contains(&Wrapper::Option)
    }

    /// Whether the type is exactly `base`, with no wrappers.
    pub fn is_plain(&self, base: &str) -> bool {
        self.wrappers.is_empty() && self.base == base && self.inner == base
    }

    /// Whether the type is exactly `Vec<base>`.
    pub fn is_list_of(&self, base: &str) -> bool {
        self.wrappers == [Wrapper::Vec] && self.base == base && self.inner == base
    }
}

/// Scalar value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarKind {
    String,
    Int,
    Float,
    Bool,
    /// Any other type, typically an enum serialized as a string.
    Other,
}

/// Classified value kind of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Not yet classified by inference.
    #[default]
    Unclassified,
    Scalar(ScalarKind),
    Timestamp,
    Geo,
    Vector,
    /// Single reference to another entity.
    Edge { target: String },
    /// Collection of references to another entity.
    EdgeList { target: String },
}

impl ValueKind {
    pub fn is_edge(&self) -> bool {
        matches!(self, ValueKind::Edge { .. } | ValueKind::EdgeList { .. })
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, ValueKind::Scalar(_))
    }

    /// Entity referenced by an edge kind.
    pub fn target(&self) -> Option<&str> {
        match self {
            ValueKind::Edge { target } | ValueKind::EdgeList { target } => Some(target),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Unclassified => "unclassified",
            ValueKind::Scalar(_) => "scalar",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Geo => "geo",
            ValueKind::Vector => "vector",
            ValueKind::Edge { .. } => "edge",
            ValueKind::EdgeList { .. } => "edge list",
        }
    }
}

/// Pairing state of a reverse edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReverseEdge {
    /// The forward edge is declared as `entity.field`.
    Paired { entity: String, field: String },
    /// No forward field exists; writes must link each child to the parent
    /// through `forward_predicate`.
    Managed {
        target: String,
        forward_predicate: String,
    },
}

/// One exported attribute of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Rust identifier, raw prefix included (`r#type`).
    pub name: String,
    pub ty: TypeRef,
    pub kind: ValueKind,
    pub serialized_name: String,
    pub directives: DirectiveSet,
    /// Storage predicate after inference.
    pub effective_predicate: String,
    pub reverse: Option<ReverseEdge>,
    /// 1-based source line.
    pub line: usize,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        ty: TypeRef,
        serialized_name: impl Into<String>,
        directives: DirectiveSet,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            kind: ValueKind::Unclassified,
            serialized_name: serialized_name.into(),
            directives,
            effective_predicate: String::new(),
            reverse: None,
            line,
        }
    }

    /// Explicit `predicate=` directive, if any.
    pub fn declared_predicate(&self) -> Option<&str> {
        self.directives.predicate.as_deref()
    }

    /// Predicate the field resolves to before inference has run.
    pub fn resolve_predicate(&self) -> &str {
        self.declared_predicate().unwrap_or(&self.serialized_name)
    }

    /// Whether the effective predicate carries the reverse sigil.
    pub fn is_reverse(&self) -> bool {
        self.effective_predicate.starts_with(REVERSE_SIGIL)
    }

    pub fn is_managed_reverse(&self) -> bool {
        matches!(self.reverse, Some(ReverseEdge::Managed { .. }))
    }

    /// Identifier without a raw-identifier prefix.
    pub fn bare_name(&self) -> &str {
        self.name.strip_prefix("r#").unwrap_or(&self.name)
    }
}
