use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentRating, Country, Genre, Location, Performance, Rating};
use crate::enums;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Film {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "dgraph.type", default)]
    pub dtype: Vec<String>,

    #[dgraph("index=exact,fulltext")]
    pub name: String,

    #[serde(rename = "tagline")]
    #[dgraph("index=term")]
    pub tagline: String,

    #[serde(rename = "initial_release_date")]
    #[dgraph("index=year")]
    pub release_date: Option<DateTime<Utc>>,

    #[dgraph("index=int")]
    pub running_time: i64,

    pub status: enums::ReleaseStatus,
    pub format: enums::FilmFormat,
    pub budget: Option<Money>,

    #[dgraph(r#"index=hnsw(metric:"cosine")"#)]
    pub embedding: Vec<f32>,

    #[dgraph("reverse count")]
    pub genre: Vec<Genre>,

    #[dgraph("reverse")]
    pub country: Vec<Country>,

    #[serde(rename = "rated")]
    #[dgraph("reverse")]
    pub ratings: Vec<Rating>,

    #[serde(rename = "content_rating")]
    pub content_rating: Option<ContentRating>,

    #[serde(rename = "starring")]
    #[dgraph("count")]
    pub performances: Vec<Performance>,

    #[serde(rename = "~filming_location")]
    pub locations: Vec<Location>,
}

/// Amount in minor units. Not a node type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: i64,
    pub currency: String,
}
