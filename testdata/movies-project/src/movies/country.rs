use serde::{Deserialize, Serialize};

use super::Film;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "dgraph.type", default)]
    pub dtype: Vec<String>,

    #[dgraph("index=term lang")]
    pub name: String,

    #[serde(rename = "~country")]
    pub films: Vec<Film>,
}
