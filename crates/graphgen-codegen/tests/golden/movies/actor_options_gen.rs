// Code generated by graphgen. DO NOT EDIT.

use super::{Actor, Performance};

/// Functional option for [`new_actor`].
pub struct ActorOption(Box<dyn FnOnce(&mut Actor)>);

impl ActorOption {
    pub fn apply(self, record: &mut Actor) {
        (self.0)(record)
    }

    /// Set `name`, stored as `name` with `index=term,exact`.
    pub fn with_name(value: String) -> Self {
        Self(Box::new(move |record| record.name = value))
    }

    /// Set `films`, stored as `actor.film` with `count`.
    pub fn with_films(value: Vec<Performance>) -> Self {
        Self(Box::new(move |record| record.films = value))
    }
}

/// Build a `Actor` with its type label set, then apply `options`.
pub fn new_actor(options: impl IntoIterator<Item = ActorOption>) -> Actor {
    let mut record = Actor {
        dtype: vec!["Actor".to_string()],
        ..Default::default()
    };
    for option in options {
        option.apply(&mut record);
    }
    record
}
