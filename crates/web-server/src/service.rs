use core_types::{Article, ArticlePatch, NewArticle};
use database::{ArticleStore, DbArticle, DbError};
use std::sync::Arc;

/// Maps between stored rows and domain articles.
///
/// The service knows nothing about HTTP and performs no validation; callers hand
/// it already-validated input and interpret empty results themselves.
#[derive(Clone)]
pub struct ArticlesService {
    store: Arc<dyn ArticleStore>,
}

impl ArticlesService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// All articles in the store's natural order.
    pub async fn get_all_articles(&self) -> Result<Vec<Article>, DbError> {
        let rows = self.store.select_all().await?;
        Ok(rows.into_iter().map(into_article).collect())
    }

    /// `Ok(None)` when no article has this id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Article>, DbError> {
        Ok(self.store.select_by_id(id).await?.map(into_article))
    }

    /// Persists a new article and returns it with its generated `id` and `date_published`.
    pub async fn insert_article(&self, article: NewArticle) -> Result<Article, DbError> {
        let row = self.store.insert(&article).await?;
        Ok(into_article(row))
    }

    /// Writes the supplied fields and returns the number of affected rows.
    pub async fn update_article(&self, id: i32, patch: ArticlePatch) -> Result<u64, DbError> {
        self.store.update(id, &patch).await
    }
}

fn into_article(row: DbArticle) -> Article {
    Article {
        id: row.id,
        title: row.title,
        content: row.content,
        style: row.style,
        date_published: row.date_published,
        author: row.author,
    }
}
