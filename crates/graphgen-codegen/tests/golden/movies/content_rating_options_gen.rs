// Code generated by graphgen. DO NOT EDIT.

use super::ContentRating;

/// Functional option for [`new_content_rating`].
pub struct ContentRatingOption(Box<dyn FnOnce(&mut ContentRating)>);

impl ContentRatingOption {
    pub fn apply(self, record: &mut ContentRating) {
        (self.0)(record)
    }

    /// Set `name`, stored as `name` with `index=exact unique upsert`.
    pub fn with_name(value: String) -> Self {
        Self(Box::new(move |record| record.name = value))
    }
}

/// Build a `ContentRating` with its type label set, then apply `options`.
pub fn new_content_rating(options: impl IntoIterator<Item = ContentRatingOption>) -> ContentRating {
    let mut record = ContentRating {
        dtype: vec!["ContentRating".to_string()],
        ..Default::default()
    };
    for option in options {
        option.apply(&mut record);
    }
    record
}
