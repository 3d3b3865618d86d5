// Code generated by graphgen. DO NOT EDIT.

use super::{Actor, Film, Performance};

/// Functional option for [`new_performance`].
pub struct PerformanceOption(Box<dyn FnOnce(&mut Performance)>);

impl PerformanceOption {
    pub fn apply(self, record: &mut Performance) {
        (self.0)(record)
    }

    /// Set `character_note`, stored as `performance.character_note`.
    pub fn with_character_note(value: String) -> Self {
        Self(Box::new(move |record| record.character_note = value))
    }

    /// Set `actor`, stored as `performance.actor`.
    pub fn with_actor(value: Option<Box<Actor>>) -> Self {
        Self(Box::new(move |record| record.actor = value))
    }

    /// Set `film`, stored as `performance.film`.
    pub fn with_film(value: Option<Box<Film>>) -> Self {
        Self(Box::new(move |record| record.film = value))
    }
}

/// Build a `Performance` with its type label set, then apply `options`.
pub fn new_performance(options: impl IntoIterator<Item = PerformanceOption>) -> Performance {
    let mut record = Performance {
        dtype: vec!["Performance".to_string()],
        ..Default::default()
    };
    for option in options {
        option.apply(&mut record);
    }
    record
}
