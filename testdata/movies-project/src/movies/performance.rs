use serde::{Deserialize, Serialize};

use super::{Actor, Film};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Performance {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "dgraph.type", default)]
    pub dtype: Vec<String>,

    #[serde(rename = "performance.character_note")]
    pub character_note: String,

    #[serde(rename = "performance.actor")]
    pub actor: Option<Box<Actor>>,

    #[serde(rename = "performance.film")]
    pub film: Option<Box<Film>>,
}
