// src/presentation/http/controllers/articles.rs
use super::ListParams;
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, Page},
    error::ApplicationError,
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    /// Absent leaves the image untouched, `null` removes it.
    #[serde(default, deserialize_with = "double_option")]
    pub cover_image: Option<Option<String>>,
}

/// Distinguishes a missing field (`None`) from an explicit `null` (`Some(None)`).
pub(super) fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

pub(super) fn parse_status(value: Option<String>) -> HttpResult<Option<ArticleStatus>> {
    value
        .map(|raw| raw.parse::<ArticleStatus>())
        .transpose()
        .map_err(|err| HttpError::from_error(ApplicationError::from(err)))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_published(ListArticlesQuery {
            q: params.q,
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(public_id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_by_public_id(actor.0.as_ref(), GetArticleQuery { public_id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let status = parse_status(payload.status)?.unwrap_or_default();
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        status,
        cover_image: payload.cover_image,
    };

    let created = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(public_id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        public_id,
        title: payload.title,
        content: payload.content,
        status: parse_status(payload.status)?,
        cover_image: payload.cover_image,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(public_id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { public_id })
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "Article deleted successfully" })))
}
