use serde::{Deserialize, Serialize};

use super::Performance;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "dgraph.type", default)]
    pub dtype: Vec<String>,

    #[dgraph("index=term,exact")]
    pub name: String,

    #[serde(rename = "actor.film")]
    #[dgraph("count")]
    pub films: Vec<Performance>,
}
