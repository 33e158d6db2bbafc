//! Request-body schemas for the articles endpoints and their boundary checks.

use core_types::{ArticlePatch, NewArticle};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    #[error("Request body must contain either 'title', 'style' or 'content'")]
    EmptyUpdate,
}

/// # POST /api/articles body
///
/// Every field is optional at the serde level so that a missing field is reported
/// by name instead of as a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub style: Option<String>,
    pub author: Option<i32>,
}

impl CreateArticleRequest {
    /// Checks `title`, `content` and `style` in that order and stops at the first
    /// one that is absent or `null`.
    pub fn validate(self) -> Result<NewArticle, ValidationError> {
        let title = self.title.ok_or(ValidationError::MissingField("title"))?;
        let content = self.content.ok_or(ValidationError::MissingField("content"))?;
        let style = self.style.ok_or(ValidationError::MissingField("style"))?;

        Ok(NewArticle {
            title,
            content,
            style,
            author: self.author,
        })
    }
}

/// # PATCH /api/articles/:article_id body
///
/// Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub style: Option<String>,
}

impl UpdateArticleRequest {
    /// Drops empty strings, then requires at least one remaining field.
    pub fn validate(self) -> Result<ArticlePatch, ValidationError> {
        let patch = ArticlePatch {
            title: non_empty(self.title),
            content: non_empty(self.content),
            style: non_empty(self.style),
        };

        if patch.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        Ok(patch)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
