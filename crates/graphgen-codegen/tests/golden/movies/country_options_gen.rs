// Code generated by graphgen. DO NOT EDIT.

use super::{Country, Film};

/// Functional option for [`new_country`].
pub struct CountryOption(Box<dyn FnOnce(&mut Country)>);

impl CountryOption {
    pub fn apply(self, record: &mut Country) {
        (self.0)(record)
    }

    /// Set `name`, stored as `name` with `index=term lang`.
    pub fn with_name(value: String) -> Self {
        Self(Box::new(move |record| record.name = value))
    }

    /// Set `films`, stored as `~country`.
    pub fn with_films(value: Vec<Film>) -> Self {
        Self(Box::new(move |record| record.films = value))
    }
}

/// Build a `Country` with its type label set, then apply `options`.
pub fn new_country(options: impl IntoIterator<Item = CountryOption>) -> Country {
    let mut record = Country {
        dtype: vec!["Country".to_string()],
        ..Default::default()
    };
    for option in options {
        option.apply(&mut record);
    }
    record
}
