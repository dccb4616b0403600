// src/presentation/http/controllers/me.rs
use super::articles::{double_option, parse_status};
use crate::application::{
    commands::users::UpdateProfileCommand,
    dto::{ArticleDto, Page, UserDto, UserProfileDto},
    queries::articles::ListOwnArticlesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct OwnArticlesParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateProfileCommand {
        name: payload.name,
        image: payload.image,
    };

    state
        .services
        .user_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_own_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<OwnArticlesParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    let query = ListOwnArticlesQuery {
        status: parse_status(params.status)?,
        q: params.q,
        page: params.page,
        limit: params.limit,
    };

    state
        .services
        .article_queries
        .list_own_articles(&user, query)
        .await
        .into_http()
        .map(Json)
}
