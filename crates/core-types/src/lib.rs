pub mod article;

// Re-export the core types to provide a clean public API.
pub use article::{Article, ArticlePatch, NewArticle};
