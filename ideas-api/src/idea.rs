use crate::{Time, User, Uuid};

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct IdeaId(pub String);

impl IdeaId {
    pub fn fresh() -> IdeaId {
        IdeaId(Uuid::new_v4().to_string())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub content: String,
    pub author: User,
    pub created_at: Time,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Time>,
    pub likes: u32,

    /// Number of comments displayed on the idea card
    pub comments: u32,

    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TrendingTag {
    pub name: String,
    pub count: u32,
}
