//! `use` declarations of the scanned files.
//!
//! Generated files live next to the scanned files, as child modules of the
//! package module. Paths relative to `self` or `super` are rebased so that
//! they resolve from there.

use std::collections::BTreeMap;

use syn::{Item, UseTree};

/// Where the declaring file sits relative to the generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole<'a> {
    /// `mod.rs`, `lib.rs` or `main.rs`: the package module itself.
    ModuleRoot,
    /// A sibling child module, e.g. `film.rs`.
    Child(&'a str),
}

/// Flatten every `use` item of `file` into `alias -> path`, rebased for a
/// generated sibling module.
///
/// Glob imports are skipped since they name no alias.
pub fn collect_imports(file: &syn::File, role: FileRole<'_>) -> Vec<(String, String)> {
    let mut imports = Vec::new();
    for item in &file.items {
        if let Item::Use(item_use) = item {
            let mut prefix = Vec::new();
            if item_use.leading_colon.is_some() {
                prefix.push(String::new());
            }
            flatten(&item_use.tree, &mut prefix, &mut imports);
        }
    }
    imports
        .into_iter()
        .map(|(alias, segments)| (alias, rebase(&segments, role)))
        .collect()
}

/// Merge per-file imports; the first declaration of an alias wins.
pub fn merge_imports(
    target: &mut BTreeMap<String, String>,
    imports: impl IntoIterator<Item = (String, String)>,
) {
    for (alias, path) in imports {
        target.entry(alias).or_insert(path);
    }
}

fn flatten(tree: &UseTree, prefix: &mut Vec<String>, out: &mut Vec<(String, Vec<String>)>) {
    match tree {
        UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            flatten(&path.tree, prefix, out);
            prefix.pop();
        }
        UseTree::Name(name) => {
            let ident = name.ident.to_string();
            if ident == "self" {
                if let Some(last) = prefix.last() {
                    out.push((last.clone(), prefix.clone()));
                }
            } else {
                let mut segments = prefix.clone();
                segments.push(ident.clone());
                out.push((ident, segments));
            }
        }
        UseTree::Rename(rename) => {
            let ident = rename.ident.to_string();
            let alias = rename.rename.to_string();
            if alias == "_" {
                return;
            }
            let mut segments = prefix.clone();
            if ident != "self" {
                segments.push(ident);
            }
            out.push((alias, segments));
        }
        UseTree::Group(group) => {
            for item in &group.items {
                flatten(item, prefix, out);
            }
        }
        UseTree::Glob(_) => {}
    }
}

fn rebase(segments: &[String], role: FileRole<'_>) -> String {
    let mut rebased: Vec<String> = Vec::with_capacity(segments.len() + 2);
    match (segments.first().map(String::as_str), role) {
        (Some("self"), FileRole::ModuleRoot) => {
            rebased.push("super".to_string());
            rebased.extend_from_slice(&segments[1..]);
        }
        (Some("super"), FileRole::ModuleRoot) => {
            rebased.push("super".to_string());
            rebased.extend_from_slice(segments);
        }
        (Some("self"), FileRole::Child(module)) => {
            rebased.push("super".to_string());
            rebased.push(module.to_string());
            rebased.extend_from_slice(&segments[1..]);
        }
        _ => rebased.extend_from_slice(segments),
    }
    rebased.join("::")
}
