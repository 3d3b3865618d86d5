//! Film catalogue record types.

mod actor;
mod content_rating;
mod country;
mod director;
mod film;
mod genre;
mod location;
mod performance;
mod rating;

pub use actor::Actor;
pub use content_rating::ContentRating;
pub use country::Country;
pub use director::Director;
pub use film::{Film, Money};
pub use genre::Genre;
pub use location::{Location, Point};
pub use performance::Performance;
pub use rating::Rating;
