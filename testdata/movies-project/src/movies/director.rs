use serde::{Deserialize, Serialize};

use super::Film;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Director {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "dgraph.type", default)]
    pub dtype: Vec<String>,

    #[dgraph("index=exact,term")]
    pub name: String,

    #[serde(rename = "director.film")]
    #[dgraph("reverse count")]
    pub films: Vec<Film>,
}
