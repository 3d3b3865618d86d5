// Code generated by graphgen. DO NOT EDIT.

use std::collections::BTreeMap;

use modusgraph::{Conn, Result};

use super::page_options_gen::{PageOption, PageOptions};
use super::Actor;

/// Query builder for `Actor` records.
#[derive(Clone)]
pub struct ActorQuery {
    conn: Conn,
    root: Option<String>,
    filters: Vec<String>,
    decls: Vec<String>,
    vars: BTreeMap<String, String>,
    order: Option<String>,
    page: PageOptions,
}

impl ActorQuery {
    pub fn new(conn: Conn) -> Self {
        Self {
            conn,
            root: None,
            filters: Vec::new(),
            decls: Vec::new(),
            vars: BTreeMap::new(),
            order: None,
            page: PageOptions::default(),
        }
    }

    /// Filter on `name` with `anyofterms`.
    pub fn name_any_of_terms(mut self, value: impl ToString) -> Self {
        let var = self.bind("string", value.to_string());
        self.filters.push(format!("anyofterms(name, {var})"));
        self
    }

    /// Filter on `name` with `allofterms`.
    pub fn name_all_of_terms(mut self, value: impl ToString) -> Self {
        let var = self.bind("string", value.to_string());
        self.filters.push(format!("allofterms(name, {var})"));
        self
    }

    /// Filter on `name` with `eq`.
    pub fn name_eq(mut self, value: impl ToString) -> Self {
        let var = self.bind("string", value.to_string());
        self.filters.push(format!("eq(name, {var})"));
        self
    }

    /// Filter on `name` with `gt`.
    pub fn name_gt(mut self, value: impl ToString) -> Self {
        let var = self.bind("string", value.to_string());
        self.filters.push(format!("gt(name, {var})"));
        self
    }

    /// Filter on `name` with `ge`.
    pub fn name_ge(mut self, value: impl ToString) -> Self {
        let var = self.bind("string", value.to_string());
        self.filters.push(format!("ge(name, {var})"));
        self
    }

    /// Filter on `name` with `lt`.
    pub fn name_lt(mut self, value: impl ToString) -> Self {
        let var = self.bind("string", value.to_string());
        self.filters.push(format!("lt(name, {var})"));
        self
    }

    /// Filter on `name` with `le`.
    pub fn name_le(mut self, value: impl ToString) -> Self {
        let var = self.bind("string", value.to_string());
        self.filters.push(format!("le(name, {var})"));
        self
    }

    pub fn order_by_name_asc(mut self) -> Self {
        self.order = Some("orderasc: name".to_string());
        self
    }

    pub fn order_by_name_desc(mut self) -> Self {
        self.order = Some("orderdesc: name".to_string());
        self
    }

    pub fn first(mut self, n: u64) -> Self {
        self.page.first = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.page.offset = Some(n);
        self
    }

    pub fn page(mut self, page: PageOptions) -> Self {
        self.page = page;
        self
    }

    pub fn paginate(mut self, options: &[PageOption]) -> Self {
        for option in options {
            option.apply(&mut self.page);
        }
        self
    }

    /// Query text for the current builder state.
    pub fn dql(&self) -> String {
        let mut dql = String::new();
        if !self.decls.is_empty() {
            dql.push_str(&format!("query q({}) ", self.decls.join(", ")));
        }
        dql.push_str("{\n  q(func: ");
        dql.push_str(self.root.as_deref().unwrap_or("type(Actor)"));
        dql.push_str(&self.page.dql_args());
        if let Some(order) = &self.order {
            dql.push_str(", ");
            dql.push_str(order);
        }
        dql.push(')');

        let mut filters = Vec::new();
        if self.root.is_some() {
            filters.push("type(Actor)".to_string());
        }
        filters.extend(self.filters.iter().cloned());
        if !filters.is_empty() {
            dql.push_str(" @filter(");
            dql.push_str(&filters.join(" AND "));
            dql.push(')');
        }
        dql.push_str(" {\n    uid\n    dgraph.type\n    expand(_all_)\n  }\n}");
        dql
    }

    /// Variables bound by the filters so far.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn exec(&self) -> Result<Vec<Actor>> {
        self.conn.query(&self.dql(), &self.vars)
    }

    #[allow(dead_code)]
    fn bind(&mut self, ty: &str, value: String) -> String {
        let var = format!("$v{}", self.vars.len());
        self.decls.push(format!("{var}: {ty}"));
        self.vars.insert(var.clone(), value);
        var
    }
}
