//! Post model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Set on the first update, absent until then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// New post creation payload
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Post update payload
#[derive(Debug, Clone)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Create/edit form submission
///
/// Fields are optional so an omitted field can be told apart from an
/// empty one: validation treats both as missing, but the edit form echoes
/// only the fields the client actually sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostForm {
    /// Field accessors that normalize an absent field to the empty string.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }
}
