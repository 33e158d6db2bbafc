use crate::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_types::{ArticlePatch, NewArticle};
use sqlx::postgres::PgPool;
use sqlx::FromRow;

/// This struct represents a row fetched from the `blogful_articles` table.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbArticle {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub style: String,
    pub date_published: DateTime<Utc>,
    pub author: Option<i32>,
}

/// Table-scoped primitives over the articles relation.
///
/// Implementations never interpret missing rows as errors: `select_by_id`
/// yields `None` and `update` reports how many rows it touched.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Every row, in the store's natural order.
    async fn select_all(&self) -> Result<Vec<DbArticle>, DbError>;

    async fn select_by_id(&self, id: i32) -> Result<Option<DbArticle>, DbError>;

    /// Inserts a row and returns it with the generated `id` and `date_published`.
    async fn insert(&self, article: &NewArticle) -> Result<DbArticle, DbError>;

    /// Writes the supplied fields onto the row matching `id` and returns the
    /// number of affected rows (0 or 1). An empty patch touches nothing.
    async fn update(&self, id: i32, patch: &ArticlePatch) -> Result<u64, DbError>;
}

/// The `DbRepository` is the PostgreSQL-backed [`ArticleStore`].
/// It encapsulates all SQL queries against `blogful_articles`.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for DbRepository {
    async fn select_all(&self) -> Result<Vec<DbArticle>, DbError> {
        let rows = sqlx::query_as::<_, DbArticle>(
            r#"
            SELECT id, title, content, style, date_published, author
            FROM blogful_articles
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<DbArticle>, DbError> {
        let row = sqlx::query_as::<_, DbArticle>(
            r#"
            SELECT id, title, content, style, date_published, author
            FROM blogful_articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, article: &NewArticle) -> Result<DbArticle, DbError> {
        let row = sqlx::query_as::<_, DbArticle>(
            r#"
            INSERT INTO blogful_articles (title, content, style, author)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, style, date_published, author
            "#,
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.style)
        .bind(article.author)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(article_id = row.id, "Inserted article.");
        Ok(row)
    }

    async fn update(&self, id: i32, patch: &ArticlePatch) -> Result<u64, DbError> {
        if patch.is_empty() {
            return Ok(0);
        }

        // NULL parameters keep the current column value.
        let result = sqlx::query(
            r#"
            UPDATE blogful_articles
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                style = COALESCE($4, style)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.content.as_deref())
        .bind(patch.style.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
