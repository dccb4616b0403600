// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use quill_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use quill_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use quill_core::domain::user::UserRepository;
use quill_core::infrastructure::util::DefaultSlugGenerator;
use quill_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{
    DummyClock, DummyPasswordHasher, DummyTokenManager, InMemoryArticleStore, InMemoryUserRepo,
};

/// ルーターと、その背後にあるメモリ上のストア
pub struct TestApp {
    pub router: axum::Router,
    pub store: Arc<InMemoryArticleStore>,
    pub users: Arc<InMemoryUserRepo>,
}

/// サービス群をモックで組み立てる。`write_repo` を省略するとストア自身を使う。
pub fn build_services(
    store: Arc<InMemoryArticleStore>,
    users: Arc<InMemoryUserRepo>,
    write_repo: Option<Arc<dyn ArticleWriteRepository>>,
    slugger: Arc<dyn SlugGenerator>,
) -> ApplicationServices {
    let user_repo: Arc<dyn UserRepository> = users;
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let article_write: Arc<dyn ArticleWriteRepository> =
        write_repo.unwrap_or_else(|| store as Arc<dyn ArticleWriteRepository>);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(DummyPasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);

    ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        password_hasher,
        token_manager,
        clock,
        slugger,
    )
}

pub fn test_app_with_write_repo(
    store: Arc<InMemoryArticleStore>,
    write_repo: Option<Arc<dyn ArticleWriteRepository>>,
) -> TestApp {
    let users = Arc::new(InMemoryUserRepo::seeded());
    let services = build_services(
        store.clone(),
        users.clone(),
        write_repo,
        Arc::new(DefaultSlugGenerator),
    );
    let state = HttpState {
        services: Arc::new(services),
    };
    TestApp {
        router: build_router(state, Vec::new()),
        store,
        users,
    }
}

/// alice (1) と bob (2) を登録済みのアプリ
pub fn test_app() -> TestApp {
    test_app_with_write_repo(InMemoryArticleStore::new(), None)
}

/// JSON リクエストを一発送る
pub async fn send(
    router: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

/// ステータスを確認して JSON ボディを返す
pub async fn expect_json(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    json_body(resp).await
}

/// エラーレスポンスの JSON 形式とステータスを確認する
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
