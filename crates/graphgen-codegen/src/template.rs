//! Registered templates and their output file names.

use std::fmt;

/// What a template is rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Rendered once against the whole package.
    Package,
    /// Rendered once per entity.
    Entity,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Package => f.write_str("package"),
            Scope::Entity => f.write_str("entity"),
        }
    }
}

/// Every template the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Client,
    PageOptions,
    Iter,
    Entity,
    Options,
    Query,
    Cli,
}

impl TemplateName {
    /// Templates in rendering order.
    pub const ALL: [TemplateName; 7] = [
        TemplateName::Client,
        TemplateName::PageOptions,
        TemplateName::Iter,
        TemplateName::Entity,
        TemplateName::Options,
        TemplateName::Query,
        TemplateName::Cli,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemplateName::Client => "client",
            TemplateName::PageOptions => "page_options",
            TemplateName::Iter => "iter",
            TemplateName::Entity => "entity",
            TemplateName::Options => "options",
            TemplateName::Query => "query",
            TemplateName::Cli => "cli",
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            TemplateName::Entity | TemplateName::Options | TemplateName::Query => Scope::Entity,
            TemplateName::Client
            | TemplateName::PageOptions
            | TemplateName::Iter
            | TemplateName::Cli => Scope::Package,
        }
    }

    /// Output file name; `entity_snake` is used by entity-scope templates.
    pub fn file_name(&self, entity_snake: &str) -> String {
        match self {
            TemplateName::Client => "client_gen.rs".to_string(),
            TemplateName::PageOptions => "page_options_gen.rs".to_string(),
            TemplateName::Iter => "iter_gen.rs".to_string(),
            TemplateName::Entity => format!("{entity_snake}_gen.rs"),
            TemplateName::Options => format!("{entity_snake}_options_gen.rs"),
            TemplateName::Query => format!("{entity_snake}_query_gen.rs"),
            TemplateName::Cli => "main.rs".to_string(),
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
