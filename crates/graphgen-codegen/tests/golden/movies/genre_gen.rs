// Code generated by graphgen. DO NOT EDIT.

use std::collections::BTreeMap;

use modusgraph::{Conn, Result};

use super::iter_gen::PageIter;
use super::page_options_gen::{PageOption, PageOptions};
use super::genre_query_gen::GenreQuery;
use super::Genre;

/// Data access for `Genre` records.
#[derive(Clone)]
pub struct GenreClient {
    conn: Conn,
}

impl GenreClient {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    /// Fetch the record with `uid`, if it exists.
    pub fn get(&self, uid: &str) -> Result<Option<Genre>> {
        self.conn.get(uid)
    }

    /// Insert `record` and store the assigned uid on it.
    pub fn add(&self, record: &mut Genre) -> Result<()> {
        if record.dtype.is_empty() {
            record.dtype = vec!["Genre".to_string()];
        }
        self.conn.insert(record)?;
        Ok(())
    }

    pub fn update(&self, record: &Genre) -> Result<()> {
        self.conn.update(record)
    }

    pub fn delete(&self, uid: &str) -> Result<()> {
        self.conn.delete(uid)
    }

    /// List records in the window described by `options`.
    pub fn list(&self, options: &[PageOption]) -> Result<Vec<Genre>> {
        self.query().page(PageOptions::from_options(options)).exec()
    }

    /// Iterate over every record, fetching `page_size` at a time.
    pub fn iter(
        &self,
        page_size: u64,
    ) -> PageIter<Genre, impl FnMut(&PageOptions) -> Result<Vec<Genre>>> {
        let conn = self.conn.clone();
        PageIter::new(page_size, move |page| {
            GenreQuery::new(conn.clone()).page(*page).exec()
        })
    }

    /// Start a filtered query.
    pub fn query(&self) -> GenreQuery {
        GenreQuery::new(self.conn.clone())
    }

    /// Text search over `name`.
    pub fn search(&self, term: &str, options: &[PageOption]) -> Result<Vec<Genre>> {
        let page = PageOptions::from_options(options);
        let mut query = String::from("query q($term: string) {\n  q(func: anyofterms(name, $term)");
        query.push_str(&page.dql_args());
        query.push_str(") @filter(type(Genre)) {\n    uid\n    dgraph.type\n    expand(_all_)\n  }\n}");

        let mut vars = BTreeMap::new();
        vars.insert("$term".to_string(), term.to_string());
        self.conn.query(&query, &vars)
    }
}
