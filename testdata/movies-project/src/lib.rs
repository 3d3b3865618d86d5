pub mod enums;
pub mod movies;
