// Code generated by graphgen. DO NOT EDIT.

use super::{Director, Film};

/// Functional option for [`new_director`].
pub struct DirectorOption(Box<dyn FnOnce(&mut Director)>);

impl DirectorOption {
    pub fn apply(self, record: &mut Director) {
        (self.0)(record)
    }

    /// Set `name`, stored as `name` with `index=exact,term`.
    pub fn with_name(value: String) -> Self {
        Self(Box::new(move |record| record.name = value))
    }

    /// Set `films`, stored as `director.film` with `count reverse`.
    pub fn with_films(value: Vec<Film>) -> Self {
        Self(Box::new(move |record| record.films = value))
    }
}

/// Build a `Director` with its type label set, then apply `options`.
pub fn new_director(options: impl IntoIterator<Item = DirectorOption>) -> Director {
    let mut record = Director {
        dtype: vec!["Director".to_string()],
        ..Default::default()
    };
    for option in options {
        option.apply(&mut record);
    }
    record
}
