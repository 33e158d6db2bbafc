use crate::repository::{ArticleStore, DbArticle};
use crate::DbError;
use async_trait::async_trait;
use chrono::Utc;
use core_types::{ArticlePatch, NewArticle};
use tokio::sync::RwLock;

/// A process-local [`ArticleStore`] with the same observable behaviour as the
/// PostgreSQL store: sequential ids starting at 1, `date_published` stamped at
/// insert time, rows returned in insertion order.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    inner: RwLock<Table>,
}

#[derive(Debug, Default)]
struct Table {
    rows: Vec<DbArticle>,
    last_id: i32,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with pre-built rows, keeping their ids.
    /// Subsequent inserts continue after the highest seeded id.
    pub fn with_rows(rows: Vec<DbArticle>) -> Self {
        let last_id = rows.iter().map(|row| row.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Table { rows, last_id }),
        }
    }

    /// The number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ArticleStore for MemoryRepository {
    async fn select_all(&self) -> Result<Vec<DbArticle>, DbError> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<DbArticle>, DbError> {
        let table = self.inner.read().await;
        Ok(table.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn insert(&self, article: &NewArticle) -> Result<DbArticle, DbError> {
        let mut table = self.inner.write().await;
        let id = table.last_id.checked_add(1).ok_or(DbError::IdSpaceExhausted)?;
        table.last_id = id;
        let row = DbArticle {
            id,
            title: article.title.clone(),
            content: article.content.clone(),
            style: article.style.clone(),
            date_published: Utc::now(),
            author: article.author,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, patch: &ArticlePatch) -> Result<u64, DbError> {
        if patch.is_empty() {
            return Ok(0);
        }

        let mut table = self.inner.write().await;
        let Some(row) = table.rows.iter_mut().find(|row| row.id == id) else {
            return Ok(0);
        };
        if let Some(title) = &patch.title {
            row.title = title.clone();
        }
        if let Some(content) = &patch.content {
            row.content = content.clone();
        }
        if let Some(style) = &patch.style {
            row.style = style.clone();
        }
        Ok(1)
    }
}
