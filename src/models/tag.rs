use crate::services::slug::derive_slug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title being edited in the create-tag form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDraft {
    pub title: String,
}

impl TagDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// The slug is always computed from the current title, never stored.
    pub fn slug(&self) -> String {
        derive_slug(&self.title)
    }
}

/// Body of `POST /tags`.
///
/// Fields are private so the slug can't drift from the title and new tags
/// always start without videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    title: String,
    slug: String,
    amount_of_videos: u64,
}

impl NewTag {
    pub fn from_title(title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = derive_slug(&title);
        Self {
            title,
            slug,
            amount_of_videos: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn amount_of_videos(&self) -> u64 {
        self.amount_of_videos
    }
}

impl From<&TagDraft> for NewTag {
    fn from(draft: &TagDraft) -> Self {
        Self::from_title(draft.title.clone())
    }
}

/// Tag identifiers come back as numbers or strings depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagId::Number(n) => write!(f, "{}", n),
            TagId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TagId>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub amount_of_videos: u64,
}
