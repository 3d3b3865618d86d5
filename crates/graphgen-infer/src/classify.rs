//! Value-kind classification.

use std::collections::BTreeSet;

use graphgen_core::{Package, ScalarKind, TypeRef, ValueKind, Wrapper};

const TIMESTAMP_TYPES: &[&str] = &["DateTime", "NaiveDateTime", "SystemTime"];
const GEO_TYPES: &[&str] = &["Point", "GeoPoint"];
const VECTOR_TYPES: &[&str] = &["VectorFloat32"];

/// Assign a [`ValueKind`] to every field of every entity.
pub fn classify(package: &mut Package) {
    let entities: BTreeSet<String> = package.entities.iter().map(|e| e.name.clone()).collect();
    for entity in &mut package.entities {
        for field in &mut entity.fields {
            field.kind = classify_type(&field.ty, &entities);
        }
    }
}

/// Classify one type against the set of entity names.
pub fn classify_type(ty: &TypeRef, entities: &BTreeSet<String>) -> ValueKind {
    if names_entity(ty, entities) {
        let target = ty.base.clone();
        return if ty.wrappers.contains(&Wrapper::Vec) {
            ValueKind::EdgeList { target }
        } else {
            ValueKind::Edge { target }
        };
    }

    let base = ty.base.as_str();
    if VECTOR_TYPES.contains(&base) || (base == "f32" && ty.wrappers.last() == Some(&Wrapper::Vec)) {
        return ValueKind::Vector;
    }
    if TIMESTAMP_TYPES.contains(&base) {
        return ValueKind::Timestamp;
    }
    if GEO_TYPES.contains(&base) {
        return ValueKind::Geo;
    }

    ValueKind::Scalar(scalar_kind(base))
}

/// Whether the innermost type is a bare or module-qualified entity name.
fn names_entity(ty: &TypeRef, entities: &BTreeSet<String>) -> bool {
    entities.contains(&ty.base)
        && (ty.inner == ty.base || ty.inner.ends_with(&format!("::{}", ty.base)))
}

fn scalar_kind(base: &str) -> ScalarKind {
    match base {
        "String" | "str" | "char" => ScalarKind::String,
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" => ScalarKind::Int,
        "f32" | "f64" => ScalarKind::Float,
        "bool" => ScalarKind::Bool,
        _ => ScalarKind::Other,
    }
}
