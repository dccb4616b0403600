// src/presentation/http/controllers/authors.rs
use super::ListParams;
use crate::application::{
    dto::{ArticleDto, AuthorDto, Page},
    queries::{articles::ListArticlesQuery, users::ListAuthorsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

pub async fn list_authors(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Page<AuthorDto>>> {
    state
        .services
        .user_queries
        .list_authors(ListAuthorsQuery {
            q: params.q,
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_author(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .user_queries
        .get_author(&username)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_author_articles(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    let query = ListArticlesQuery {
        q: params.q,
        page: params.page,
        limit: params.limit,
    };

    state
        .services
        .article_queries
        .list_author_articles(&username, query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_author_article(
    Extension(state): Extension<HttpState>,
    Path((username, slug)): Path<(String, String)>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_by_author_slug(&username, &slug)
        .await
        .into_http()
        .map(Json)
}
