use serde::{Deserialize, Serialize};

use super::Film;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "dgraph.type", default)]
    pub dtype: Vec<String>,

    #[dgraph("index=term unique")]
    pub name: String,

    #[serde(rename = "~genre")]
    pub films: Vec<Film>,
}
