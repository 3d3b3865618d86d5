use serde::{Deserialize, Serialize};

use super::Film;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "dgraph.type", default)]
    pub dtype: Vec<String>,

    #[dgraph("index=hash")]
    pub name: String,

    #[serde(rename = "~rated")]
    pub films: Vec<Film>,
}
