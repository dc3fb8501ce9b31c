use std::collections::BTreeMap;

use crate::{Comment, Idea, IdeaId, TrendingTag, User};

/// Everything the front end displays, as loaded from a static JSON document
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub users: Vec<User>,
    pub ideas: Vec<Idea>,

    /// Top-level comments of each idea
    #[serde(default)]
    pub comments: BTreeMap<IdeaId, Vec<Comment>>,

    #[serde(default)]
    pub trending_tags: Vec<TrendingTag>,
}
