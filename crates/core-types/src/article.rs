use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog article as seen by the rest of the application.
///
/// `id` and `date_published` are always assigned by the store; clients never set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// Free-text category such as "Listicle", "How-to" or "Interview".
    pub style: String,
    pub date_published: DateTime<Utc>,
    pub author: Option<i32>,
}

/// The fields needed to create an article. All text fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub style: String,
    pub author: Option<i32>,
}

/// A partial update. `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub style: Option<String>,
}

impl ArticlePatch {
    /// Returns `true` when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.style.is_none()
    }
}
