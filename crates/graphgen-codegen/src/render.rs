//! Rendering backends.

use askama::Template;

use crate::error::{GenerateError, GenerateResult};
use crate::template::{Scope, TemplateName};
use crate::view::{EntityView, PackageView};

/// Data handed to one template invocation.
#[derive(Debug, Clone, Copy)]
pub enum RenderInput<'a> {
    Package(&'a PackageView),
    Entity(&'a PackageView, &'a EntityView),
}

impl RenderInput<'_> {
    pub fn scope(&self) -> Scope {
        match self {
            RenderInput::Package(_) => Scope::Package,
            RenderInput::Entity(..) => Scope::Entity,
        }
    }
}

/// Turns a template name plus its input into source text.
pub trait Renderer {
    fn render(&self, template: TemplateName, input: RenderInput<'_>) -> GenerateResult<String>;
}

/// Renderer backed by the compiled-in askama templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct AskamaRenderer;

impl Renderer for AskamaRenderer {
    fn render(&self, template: TemplateName, input: RenderInput<'_>) -> GenerateResult<String> {
        if template.scope() != input.scope() {
            return Err(GenerateError::ScopeMismatch {
                template,
                expected: template.scope(),
                actual: input.scope(),
            });
        }

        let rendered = match (template, input) {
            (TemplateName::Client, RenderInput::Package(pkg)) => ClientTemplate { pkg }.render(),
            (TemplateName::PageOptions, RenderInput::Package(pkg)) => {
                PageOptionsTemplate { pkg }.render()
            }
            (TemplateName::Iter, RenderInput::Package(pkg)) => IterTemplate { pkg }.render(),
            (TemplateName::Cli, RenderInput::Package(pkg)) => CliTemplate { pkg }.render(),
            (TemplateName::Entity, RenderInput::Entity(pkg, entity)) => {
                EntityTemplate { pkg, entity }.render()
            }
            (TemplateName::Options, RenderInput::Entity(pkg, entity)) => {
                OptionsTemplate { pkg, entity }.render()
            }
            (TemplateName::Query, RenderInput::Entity(pkg, entity)) => {
                QueryTemplate { pkg, entity }.render()
            }
            // Scopes were checked above.
            (template, input) => {
                return Err(GenerateError::ScopeMismatch {
                    template,
                    expected: template.scope(),
                    actual: input.scope(),
                })
            }
        };

        rendered.map_err(|err| GenerateError::Template {
            template,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Package templates
// =============================================================================

#[derive(Template)]
#[template(path = "client.rs.j2", escape = "none")]
struct ClientTemplate<'a> {
    pkg: &'a PackageView,
}

#[derive(Template)]
#[template(path = "page_options.rs.j2", escape = "none")]
struct PageOptionsTemplate<'a> {
    pkg: &'a PackageView,
}

#[derive(Template)]
#[template(path = "iter.rs.j2", escape = "none")]
struct IterTemplate<'a> {
    pkg: &'a PackageView,
}

#[derive(Template)]
#[template(path = "cli.rs.j2", escape = "none")]
struct CliTemplate<'a> {
    pkg: &'a PackageView,
}

// =============================================================================
// Entity templates
// =============================================================================

#[derive(Template)]
#[template(path = "entity.rs.j2", escape = "none")]
struct EntityTemplate<'a> {
    pkg: &'a PackageView,
    entity: &'a EntityView,
}

#[derive(Template)]
#[template(path = "options.rs.j2", escape = "none")]
struct OptionsTemplate<'a> {
    pkg: &'a PackageView,
    entity: &'a EntityView,
}

#[derive(Template)]
#[template(path = "query.rs.j2", escape = "none")]
struct QueryTemplate<'a> {
    pkg: &'a PackageView,
    entity: &'a EntityView,
}
