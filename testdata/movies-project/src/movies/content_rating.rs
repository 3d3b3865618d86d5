use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRating {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "dgraph.type", default)]
    pub dtype: Vec<String>,

    #[dgraph("index=exact unique upsert")]
    pub name: String,
}
