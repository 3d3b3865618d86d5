// Code generated by graphgen. DO NOT EDIT.

use modusgraph::{Conn, Result};

use super::iter_gen::PageIter;
use super::page_options_gen::{PageOption, PageOptions};
use super::content_rating_query_gen::ContentRatingQuery;
use super::ContentRating;

/// Data access for `ContentRating` records.
#[derive(Clone)]
pub struct ContentRatingClient {
    conn: Conn,
}

impl ContentRatingClient {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    /// Fetch the record with `uid`, if it exists.
    pub fn get(&self, uid: &str) -> Result<Option<ContentRating>> {
        self.conn.get(uid)
    }

    /// Insert `record` and store the assigned uid on it.
    pub fn add(&self, record: &mut ContentRating) -> Result<()> {
        if record.dtype.is_empty() {
            record.dtype = vec!["ContentRating".to_string()];
        }
        self.conn.insert(record)?;
        Ok(())
    }

    pub fn update(&self, record: &ContentRating) -> Result<()> {
        self.conn.update(record)
    }

    pub fn delete(&self, uid: &str) -> Result<()> {
        self.conn.delete(uid)
    }

    /// List records in the window described by `options`.
    pub fn list(&self, options: &[PageOption]) -> Result<Vec<ContentRating>> {
        self.query().page(PageOptions::from_options(options)).exec()
    }

    /// Iterate over every record, fetching `page_size` at a time.
    pub fn iter(
        &self,
        page_size: u64,
    ) -> PageIter<ContentRating, impl FnMut(&PageOptions) -> Result<Vec<ContentRating>>> {
        let conn = self.conn.clone();
        PageIter::new(page_size, move |page| {
            ContentRatingQuery::new(conn.clone()).page(*page).exec()
        })
    }

    /// Start a filtered query.
    pub fn query(&self) -> ContentRatingQuery {
        ContentRatingQuery::new(self.conn.clone())
    }
}
