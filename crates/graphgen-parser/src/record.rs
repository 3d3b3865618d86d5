//! Record declaration extraction.
//!
//! Every `pub struct` with named fields is inspected. Only `pub` fields are
//! exported; `#[serde(skip)]` fields are dropped and `#[serde(rename)]` /
//! `#[serde(rename_all)]` decide the serialization name. Storage directives
//! come from a single `#[dgraph("...")]` attribute per field.

use graphgen_core::naming::apply_rename_rule;
use graphgen_core::{
    DirectiveSet, Entity, Field, Identity, DGRAPH_TYPE_SERIALIZED_NAME, UID_SERIALIZED_NAME,
};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Fields, Item, ItemStruct, LitStr, Token, Visibility};
use tracing::{debug, warn};

use crate::error::{ParseError, ParseResult};
use crate::scan::SourceFile;
use crate::types::type_ref;

/// Records extracted from one file.
#[derive(Debug, Default)]
pub struct FileRecords {
    pub entities: Vec<Entity>,
    /// Every type declared at file level, in declaration order.
    pub local_types: Vec<String>,
}

/// Extract entities and local type names from a parsed file.
pub fn extract_records(source: &SourceFile, file: &syn::File) -> ParseResult<FileRecords> {
    let mut records = FileRecords::default();

    for item in &file.items {
        let ident = match item {
            Item::Struct(item) => &item.ident,
            Item::Enum(item) => &item.ident,
            Item::Type(item) => &item.ident,
            Item::Union(item) => &item.ident,
            _ => continue,
        };
        records.local_types.push(ident.to_string());

        if let Item::Struct(item) = item {
            if let Some(entity) = extract_entity(source, item)? {
                records.entities.push(entity);
            }
        }
    }

    Ok(records)
}

fn extract_entity(source: &SourceFile, item: &ItemStruct) -> ParseResult<Option<Entity>> {
    if !matches!(item.vis, Visibility::Public(_)) {
        return Ok(None);
    }
    let Fields::Named(named) = &item.fields else {
        return Ok(None);
    };

    let entity_name = item.ident.to_string();
    let rename_all = container_rename_all(&item.attrs);
    let mut uid = None;
    let mut dgraph_type = None;
    let mut fields = Vec::new();

    for field in &named.named {
        let Some(ident) = &field.ident else { continue };
        let line = ident.span().start().line;
        let name = ident.to_string();

        if !matches!(field.vis, Visibility::Public(_)) {
            debug!(entity = %entity_name, field = %name, "Skipping private field");
            continue;
        }

        let attribute_error = |message: String| ParseError::Attribute {
            file: source.path.clone(),
            line,
            entity: entity_name.clone(),
            field: name.clone(),
            message,
        };

        let serde = field_serde(&field.attrs).map_err(|err| attribute_error(err.to_string()))?;
        if serde.is_excluded() {
            continue;
        }

        let bare = ident.unraw().to_string();
        let serialized_name = serde
            .rename
            .or_else(|| {
                rename_all
                    .as_deref()
                    .and_then(|rule| apply_rename_rule(rule, &bare))
            })
            .unwrap_or(bare);

        let ty = type_ref(&field.ty);

        if serialized_name == UID_SERIALIZED_NAME && ty.is_plain("String") {
            uid = Some(name.clone());
            continue;
        }
        if serialized_name == DGRAPH_TYPE_SERIALIZED_NAME && ty.is_list_of("String") {
            dgraph_type = Some(name.clone());
            continue;
        }

        let directives = match directive_source(&field.attrs).map_err(attribute_error)? {
            Some(text) => DirectiveSet::parse(&text).map_err(|source_err| ParseError::Directive {
                file: source.path.clone(),
                line,
                entity: entity_name.clone(),
                field: name.clone(),
                source: source_err,
            })?,
            None => DirectiveSet::default(),
        };

        fields.push(Field::new(name, ty, serialized_name, directives, line));
    }

    let (uid, dgraph_type) = match (uid, dgraph_type) {
        (Some(uid), Some(dgraph_type)) => (uid, dgraph_type),
        (None, None) => return Ok(None),
        (uid, _) => {
            let missing = if uid.is_none() {
                "`uid: String`"
            } else {
                "a `dgraph.type` Vec<String> field"
            };
            warn!(
                entity = %entity_name,
                file = %source.name,
                "Struct carries only one identity field and is not an entity; missing {missing}"
            );
            return Ok(None);
        }
    };

    debug!(entity = %entity_name, fields = fields.len(), "Extracted entity");
    Ok(Some(Entity {
        name: entity_name,
        identity: Identity { uid, dgraph_type },
        fields,
        searchable: false,
        search: None,
        file: source.name.clone(),
        line: item.ident.span().start().line,
    }))
}

// =============================================================================
// Attributes
// =============================================================================

#[derive(Debug, Default)]
struct FieldSerde {
    rename: Option<String>,
    skip: bool,
    skip_serializing: bool,
    skip_deserializing: bool,
}

impl FieldSerde {
    /// Whether the field never crosses the wire in either direction.
    fn is_excluded(&self) -> bool {
        self.skip || (self.skip_serializing && self.skip_deserializing)
    }
}

fn field_serde(attrs: &[Attribute]) -> syn::Result<FieldSerde> {
    let mut serde = FieldSerde::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Some(name) = serialize_name(&meta)? {
                    serde.rename = Some(name);
                }
            } else if meta.path.is_ident("skip") {
                serde.skip = true;
            } else if meta.path.is_ident("skip_serializing") {
                serde.skip_serializing = true;
            } else if meta.path.is_ident("skip_deserializing") {
                serde.skip_deserializing = true;
            } else {
                skip_meta_value(&meta)?;
            }
            Ok(())
        })?;
    }
    Ok(serde)
}

fn container_rename_all(attrs: &[Attribute]) -> Option<String> {
    let mut rule = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rule = serialize_name(&meta)?;
            } else {
                skip_meta_value(&meta)?;
            }
            Ok(())
        });
        if let Err(err) = parsed {
            warn!(error = %err, "Ignoring unreadable container serde attribute");
        }
    }

    match rule {
        Some(rule) if apply_rename_rule(&rule, "field").is_none() => {
            warn!(rule = %rule, "Ignoring unknown rename_all rule");
            None
        }
        other => other,
    }
}

/// Value of `key = "..."` or of `key(serialize = "...")`.
fn serialize_name(meta: &ParseNestedMeta) -> syn::Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        let lit: LitStr = meta.value()?.parse()?;
        return Ok(Some(lit.value()));
    }

    let mut name = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            let lit: LitStr = inner.value()?.parse()?;
            name = Some(lit.value());
        } else {
            skip_meta_value(&inner)?;
        }
        Ok(())
    })?;
    Ok(name)
}

/// Consume the value of a meta item this parser does not interpret.
fn skip_meta_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_meta_value(&inner))?;
    }
    Ok(())
}

/// Text of the field's `#[dgraph("...")]` attribute, if present.
fn directive_source(attrs: &[Attribute]) -> Result<Option<String>, String> {
    let mut found: Option<String> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("dgraph")) {
        if found.is_some() {
            return Err("duplicate #[dgraph] attribute".to_string());
        }
        let lit: LitStr = attr
            .parse_args()
            .map_err(|err| format!("expected #[dgraph(\"...\")]: {err}"))?;
        found = Some(lit.value());
    }
    Ok(found)
}
