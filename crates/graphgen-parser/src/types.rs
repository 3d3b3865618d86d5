//! Field type rendering and wrapper peeling.

use graphgen_core::{TypeRef, Wrapper};
use quote::ToTokens;
use syn::{GenericArgument, PathArguments, ReturnType, Type, TypePath};

/// Build a [`TypeRef`] from a parsed field type.
pub fn type_ref(ty: &Type) -> TypeRef {
    let mut wrappers = Vec::new();
    let mut current = strip_groups(ty);
    while let Some((wrapper, inner)) = peel_wrapper(current) {
        wrappers.push(wrapper);
        current = strip_groups(inner);
    }

    let base = match current {
        Type::Path(TypePath { path, .. }) => path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_default(),
        other => render_type(other),
    };

    let mut roots = Vec::new();
    collect_roots(ty, &mut roots);

    TypeRef {
        rendered: render_type(ty),
        wrappers,
        base,
        inner: render_type(current),
        roots,
    }
}

fn strip_groups(ty: &Type) -> &Type {
    match ty {
        Type::Paren(paren) => strip_groups(&paren.elem),
        Type::Group(group) => strip_groups(&group.elem),
        other => other,
    }
}

/// `Option<T>`, `Box<T>` or `Vec<T>`, optionally spelled with a std path.
fn peel_wrapper(ty: &Type) -> Option<(Wrapper, &Type)> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    let prefix_ok = path.segments.len() == 1
        || path
            .segments
            .first()
            .is_some_and(|first| matches!(first.ident.to_string().as_str(), "std" | "alloc" | "core"));
    if !prefix_ok {
        return None;
    }

    let wrapper = match segment.ident.to_string().as_str() {
        "Option" => Wrapper::Option,
        "Box" => Wrapper::Box,
        "Vec" => Wrapper::Vec,
        _ => return None,
    };

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });
    let inner = types.next()?;
    if types.next().is_some() {
        return None;
    }
    Some((wrapper, inner))
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a type the way it would be written by hand.
pub fn render_type(ty: &Type) -> String {
    match ty {
        Type::Path(TypePath { qself: None, path }) => render_path(path),
        Type::Reference(reference) => {
            let mut out = String::from("&");
            if let Some(lifetime) = &reference.lifetime {
                out.push_str(&lifetime.to_string());
                out.push(' ');
            }
            if reference.mutability.is_some() {
                out.push_str("mut ");
            }
            out.push_str(&render_type(&reference.elem));
            out
        }
        Type::Slice(slice) => format!("[{}]", render_type(&slice.elem)),
        Type::Array(array) => format!(
            "[{}; {}]",
            render_type(&array.elem),
            tidy_tokens(&array.len.to_token_stream().to_string())
        ),
        Type::Tuple(tuple) => {
            let elems: Vec<String> = tuple.elems.iter().map(render_type).collect();
            if elems.len() == 1 {
                format!("({},)", elems[0])
            } else {
                format!("({})", elems.join(", "))
            }
        }
        Type::Paren(paren) => format!("({})", render_type(&paren.elem)),
        Type::Group(group) => render_type(&group.elem),
        other => tidy_tokens(&other.to_token_stream().to_string()),
    }
}

fn render_path(path: &syn::Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (i, segment) in path.segments.iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
        match &segment.arguments {
            PathArguments::None => {}
            PathArguments::AngleBracketed(args) => {
                let rendered: Vec<String> = args.args.iter().map(render_argument).collect();
                out.push('<');
                out.push_str(&rendered.join(", "));
                out.push('>');
            }
            PathArguments::Parenthesized(args) => {
                let inputs: Vec<String> = args.inputs.iter().map(render_type).collect();
                out.push('(');
                out.push_str(&inputs.join(", "));
                out.push(')');
                if let ReturnType::Type(_, output) = &args.output {
                    out.push_str(" -> ");
                    out.push_str(&render_type(output));
                }
            }
        }
    }
    out
}

fn render_argument(arg: &GenericArgument) -> String {
    match arg {
        GenericArgument::Type(ty) => render_type(ty),
        GenericArgument::Lifetime(lifetime) => lifetime.to_string(),
        GenericArgument::AssocType(assoc) => {
            format!("{} = {}", assoc.ident, render_type(&assoc.ty))
        }
        other => tidy_tokens(&other.to_token_stream().to_string()),
    }
}

/// Collapse the spacing `proc_macro2` puts between tokens.
fn tidy_tokens(tokens: &str) -> String {
    tokens
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

// =============================================================================
// Roots
// =============================================================================

/// First path segment of every path mentioned in `ty`, in first-seen order.
fn collect_roots(ty: &Type, roots: &mut Vec<String>) {
    match ty {
        Type::Path(TypePath { qself, path }) => {
            if let Some(qself) = qself {
                collect_roots(&qself.ty, roots);
            }
            if path.leading_colon.is_none() {
                if let Some(first) = path.segments.first() {
                    let root = first.ident.to_string();
                    if !roots.contains(&root) {
                        roots.push(root);
                    }
                }
            }
            for segment in &path.segments {
                match &segment.arguments {
                    PathArguments::None => {}
                    PathArguments::AngleBracketed(args) => {
                        for arg in &args.args {
                            match arg {
                                GenericArgument::Type(inner) => collect_roots(inner, roots),
                                GenericArgument::AssocType(assoc) => {
                                    collect_roots(&assoc.ty, roots)
                                }
                                _ => {}
                            }
                        }
                    }
                    PathArguments::Parenthesized(args) => {
                        for input in &args.inputs {
                            collect_roots(input, roots);
                        }
                        if let ReturnType::Type(_, output) = &args.output {
                            collect_roots(output, roots);
                        }
                    }
                }
            }
        }
        Type::Reference(reference) => collect_roots(&reference.elem, roots),
        Type::Slice(slice) => collect_roots(&slice.elem, roots),
        Type::Array(array) => collect_roots(&array.elem, roots),
        Type::Paren(paren) => collect_roots(&paren.elem, roots),
        Type::Group(group) => collect_roots(&group.elem, roots),
        Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_roots(elem, roots);
            }
        }
        _ => {}
    }
}
