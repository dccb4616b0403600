// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, auth, authors, me};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
    routing::post,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/me", get(me::profile).patch(me::update_profile))
        .route("/api/v1/me/articles", get(me::list_own_articles))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{public_id}",
            get(articles::get_article)
                .patch(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/v1/authors", get(authors::list_authors))
        .route("/api/v1/authors/{username}", get(authors::get_author))
        .route(
            "/api/v1/authors/{username}/articles",
            get(authors::list_author_articles),
        )
        .route(
            "/api/v1/authors/{username}/articles/{slug}",
            get(authors::get_author_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
