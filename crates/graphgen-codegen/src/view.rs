//! Template-facing views of the inferred model.
//!
//! Templates only see plain strings, booleans and vectors. Everything that
//! needs logic (import grouping, filter selection, literal escaping) is
//! computed here so the templates stay declarative.

use std::collections::{BTreeMap, BTreeSet};

use graphgen_core::naming::{escape_keyword, to_snake_case};
use graphgen_core::{
    Entity, Field, GenerateConfig, IndexKind, Package, ReverseEdge, ValueKind, Wrapper,
    GENERATED_MARKER,
};

use crate::error::{GenerateError, GenerateResult};

// =============================================================================
// Package
// =============================================================================

/// Package-scope view.
#[derive(Debug, Clone)]
pub struct PackageView {
    pub marker: &'static str,
    pub name: String,
    pub module_path: String,
    /// Runtime crate the generated code calls into.
    pub runtime: String,
    pub cli_name: String,
    pub with_validator: bool,
    pub entities: Vec<EntityView>,
}

impl PackageView {
    /// Build the view, rejecting packages that were not inferred.
    pub fn build(package: &Package, config: &GenerateConfig) -> GenerateResult<Self> {
        for entity in &package.entities {
            if let Some(field) = entity
                .fields
                .iter()
                .find(|f| f.kind == ValueKind::Unclassified)
            {
                return Err(GenerateError::Uninferred {
                    entity: entity.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        let cli_name = config
            .cli_name
            .clone()
            .unwrap_or_else(|| package.cli_display_name().to_string());

        Ok(Self {
            marker: GENERATED_MARKER,
            name: package.name.clone(),
            module_path: package.module_path.clone(),
            runtime: config.runtime_crate.clone(),
            cli_name,
            with_validator: config.with_validator || package.with_validator,
            entities: package
                .entities
                .iter()
                .map(|entity| EntityView::build(entity, package))
                .collect(),
        })
    }
}

// =============================================================================
// Entity
// =============================================================================

/// Entity-scope view.
#[derive(Debug, Clone)]
pub struct EntityView {
    pub name: String,
    pub snake: String,
    /// Field name of the entity's client on `Client`.
    pub client_field: String,
    /// Rust identifier of the uid field.
    pub uid: String,
    /// Rust identifier of the type-label field.
    pub dtype: String,
    pub searchable: bool,
    pub search_field: String,
    /// Rust literal holding the search query up to the paging arguments.
    pub search_prefix: String,
    /// Rust literal closing the search query.
    pub search_suffix: String,
    /// Rust literal of the type filter, e.g. `"type(Film)"`.
    pub type_filter: String,
    pub fields: Vec<FieldView>,
    pub managed: Vec<ManagedView>,
    /// Complete `use` block of the options artifact.
    pub options_imports: String,
    pub filters: Vec<FilterView>,
    pub orderings: Vec<OrderView>,
}

impl EntityView {
    fn build(entity: &Entity, package: &Package) -> Self {
        let snake = to_snake_case(&entity.name);
        let search = entity.search.as_ref();
        let selection = "    uid\n    dgraph.type\n    expand(_all_)\n  }\n}";

        let (search_field, search_prefix, search_suffix) = match search {
            Some(index) => (
                index.field.clone(),
                rust_literal(&format!(
                    "query q($term: string) {{\n  q(func: {}({}, $term)",
                    index.function.dql_name(),
                    index.predicate
                )),
                rust_literal(&format!(
                    ") @filter(type({})) {{\n{selection}",
                    entity.name
                )),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        let managed = entity
            .managed_reverse_fields()
            .filter_map(|field| ManagedView::build(field, package))
            .collect();

        Self {
            name: entity.name.clone(),
            client_field: escape_keyword(&snake),
            snake,
            uid: entity.identity.uid.clone(),
            dtype: entity.identity.dgraph_type.clone(),
            searchable: entity.searchable && search.is_some(),
            search_field,
            search_prefix,
            search_suffix,
            type_filter: rust_literal(&format!("type({})", entity.name)),
            fields: entity.fields.iter().map(FieldView::build).collect(),
            managed,
            options_imports: options_imports(entity, package),
            filters: entity.fields.iter().flat_map(filters_for).collect(),
            orderings: entity.fields.iter().filter_map(OrderView::build).collect(),
        }
    }
}

/// One settable field.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub name: String,
    pub bare: String,
    pub ty: String,
    pub predicate: String,
    pub doc: String,
}

impl FieldView {
    fn build(field: &Field) -> Self {
        let bare = field.bare_name().to_string();
        let doc = if field.directives.is_empty() {
            format!("Set `{bare}`, stored as `{}`.", field.effective_predicate)
        } else {
            format!(
                "Set `{bare}`, stored as `{}` with `{}`.",
                field.effective_predicate, field.directives
            )
        };
        Self {
            name: field.name.clone(),
            bare,
            ty: field.ty.rendered.clone(),
            predicate: field.effective_predicate.clone(),
            doc,
        }
    }
}

/// A reverse edge the generated `add` has to link by hand.
#[derive(Debug, Clone)]
pub struct ManagedView {
    pub field: String,
    /// Expression yielding `&Child` items from `record`.
    pub children: String,
    /// Uid field of the child entity.
    pub child_uid: String,
    pub forward_predicate: String,
    pub target: String,
}

impl ManagedView {
    fn build(field: &Field, package: &Package) -> Option<Self> {
        let Some(ReverseEdge::Managed {
            target,
            forward_predicate,
        }) = &field.reverse
        else {
            return None;
        };
        let child = package.entity(target)?;

        let wrappers = &field.ty.wrappers;
        let children = match wrappers.first() {
            Some(Wrapper::Option) if field.ty.is_list() => {
                format!("record.{}.iter().flatten()", field.name)
            }
            _ if field.ty.is_list() || field.ty.is_optional() => {
                format!("record.{}.iter()", field.name)
            }
            _ => format!("std::iter::once(&record.{})", field.name),
        };

        Some(Self {
            field: field.name.clone(),
            children,
            child_uid: child.identity.uid.clone(),
            forward_predicate: forward_predicate.clone(),
            target: target.clone(),
        })
    }
}

// =============================================================================
// Query builder
// =============================================================================

/// One filter method on the query builder.
#[derive(Debug, Clone)]
pub struct FilterView {
    pub method: String,
    pub function: String,
    pub predicate: String,
    /// Query variable type the value is bound as.
    pub var_type: &'static str,
    /// `compare`, `regexp`, `near` or `similar`.
    pub style: &'static str,
    pub doc: String,
}

fn filters_for(field: &Field) -> Vec<FilterView> {
    if field.kind.is_edge() {
        return Vec::new();
    }

    let bare = field.bare_name();
    let predicate = &field.effective_predicate;
    let mut seen = BTreeSet::new();
    let mut filters = Vec::new();

    let mut push = |suffix: &str, function: &str, var_type: &'static str, style: &'static str| {
        let method = format!("{bare}_{suffix}");
        if seen.insert(method.clone()) {
            filters.push(FilterView {
                doc: format!("Filter on `{predicate}` with `{function}`."),
                method,
                function: function.to_string(),
                predicate: predicate.clone(),
                var_type,
                style,
            });
        }
    };

    for index in &field.directives.index {
        let ty = var_type(index);
        if index.supports_eq() {
            push("eq", "eq", ty, "compare");
        }
        if index.supports_range() {
            for op in ["gt", "ge", "lt", "le"] {
                push(op, op, ty, "compare");
            }
        }
        match index {
            IndexKind::Term => {
                push("any_of_terms", "anyofterms", "string", "compare");
                push("all_of_terms", "allofterms", "string", "compare");
            }
            IndexKind::Fulltext => {
                push("any_of_text", "anyoftext", "string", "compare");
                push("all_of_text", "alloftext", "string", "compare");
            }
            IndexKind::Trigram => push("regexp", "regexp", "string", "regexp"),
            IndexKind::Geo => push("near", "near", "string", "near"),
            IndexKind::Hnsw(_) => push("similar_to", "similar_to", "string", "similar"),
            _ => {}
        }
    }

    filters
}

fn var_type(index: &IndexKind) -> &'static str {
    match index {
        IndexKind::Int => "int",
        IndexKind::Float => "float",
        IndexKind::Bool => "bool",
        _ => "string",
    }
}

/// Ordering helpers for a range-indexed field.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub bare: String,
    pub predicate: String,
}

impl OrderView {
    fn build(field: &Field) -> Option<Self> {
        let orderable = matches!(field.kind, ValueKind::Scalar(_) | ValueKind::Timestamp)
            && field.directives.index.iter().any(IndexKind::supports_range);
        orderable.then(|| Self {
            bare: field.bare_name().to_string(),
            predicate: field.effective_predicate.clone(),
        })
    }
}

// =============================================================================
// Imports
// =============================================================================

/// `use` block for an entity's options artifact: external paths first, then
/// the sibling types pulled in through `super`.
fn options_imports(entity: &Entity, package: &Package) -> String {
    let mut lines = external_imports(&entity.fields, &package.imports, &package.local_types);

    let mut local: BTreeSet<&str> = BTreeSet::new();
    local.insert(&entity.name);
    for field in &entity.fields {
        for root in &field.ty.roots {
            if package.local_types.contains(root) {
                local.insert(root);
            }
        }
    }
    let local: Vec<&str> = local.into_iter().collect();
    let super_line = if local.len() == 1 {
        format!("use super::{};", local[0])
    } else {
        format!("use super::{{{}}};", local.join(", "))
    };

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(super_line);
    lines.join("\n")
}

/// One `use` line per external module path referenced by `fields`.
///
/// Names sharing a parent path are grouped (`use a::b::{X, Y};`). Renamed
/// imports get a line of their own. Roots that are declared locally or that
/// no `use` declaration covers are left alone.
pub fn external_imports(
    fields: &[Field],
    imports: &BTreeMap<String, String>,
    local_types: &BTreeSet<String>,
) -> Vec<String> {
    let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut lines: BTreeSet<String> = BTreeSet::new();

    for root in fields.iter().flat_map(|f| f.ty.roots.iter()) {
        if local_types.contains(root) {
            continue;
        }
        let Some(path) = imports.get(root) else {
            continue;
        };
        let Some((parent, name)) = path.rsplit_once("::") else {
            continue;
        };
        if name == root {
            grouped.entry(parent).or_default().insert(name);
        } else {
            lines.insert(format!("use {path} as {root};"));
        }
    }

    for (parent, names) in grouped {
        let names: Vec<&str> = names.into_iter().collect();
        let line = if names.len() == 1 {
            format!("use {parent}::{};", names[0])
        } else {
            format!("use {parent}::{{{}}};", names.join(", "))
        };
        lines.insert(line);
    }

    lines.into_iter().collect()
}

/// Render `text` as a Rust string literal.
fn rust_literal(text: &str) -> String {
    format!("{text:?}")
}
