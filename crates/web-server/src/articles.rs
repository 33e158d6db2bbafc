use crate::sanitize::sanitize_article;
use crate::validation::{CreateArticleRequest, UpdateArticleRequest};
use crate::{error::AppError, AppState};
use axum::{
    extract::{DefaultBodyLimit, OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use core_types::Article;
use std::sync::Arc;

/// The articles resource, meant to be nested under `/api/articles`.
///
/// The router carries its own body limit so request bodies are bounded per resource.
pub fn router(body_limit_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route("/:article_id", get(get_article).patch(update_article))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
}

/// # GET /api/articles
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Article>>, AppError> {
    let articles = state.articles.get_all_articles().await?;
    Ok(Json(articles.into_iter().map(sanitize_article).collect()))
}

/// # POST /api/articles
/// Responds 201 with the stored article and a `Location` header pointing at it.
pub async fn create_article(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    WithRejection(Json(body), _): WithRejection<Json<CreateArticleRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let new_article = body.validate()?;
    let article = state.articles.insert_article(new_article).await?;
    tracing::info!(article_id = article.id, "Article created.");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), article.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(sanitize_article(article)),
    ))
}

/// # GET /api/articles/:article_id
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(article_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<Article>, AppError> {
    let article = state
        .articles
        .get_by_id(article_id)
        .await?
        .ok_or(AppError::ArticleNotFound)?;
    Ok(Json(sanitize_article(article)))
}

/// # PATCH /api/articles/:article_id
/// Writes only the supplied fields. 404 when no row matched the id.
pub async fn update_article(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(article_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateArticleRequest>, AppError>,
) -> Result<StatusCode, AppError> {
    let patch = body.validate()?;
    let rows_affected = state.articles.update_article(article_id, patch).await?;
    if rows_affected == 0 {
        return Err(AppError::ArticleNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
