// tests/support/mocks/security.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Duration;
use quill_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use quill_core::domain::user::UserId;

use super::time::fixed_now;

/// シード済みユーザー 1 (alice) のトークン
pub const AUTHOR_TOKEN: &str = "user-1:alice";
/// シード済みユーザー 2 (bob) のトークン
pub const OTHER_TOKEN: &str = "user-2:bob";

/// `user-{id}:{username}` 形式のトークンを作る
pub fn token_for(id: i64, username: &str) -> String {
    format!("user-{id}:{username}")
}

/// サービス層のテストで使う認証済みユーザー
pub fn actor(id: i64, username: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: username.into(),
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

/// 平文に接頭辞を付けるだけのハッシャー。ダミー照合の回数を数える。
#[derive(Default)]
pub struct DummyPasswordHasher {
    dummy_checks: AtomicUsize,
}

impl DummyPasswordHasher {
    pub fn dummy_checks(&self) -> usize {
        self.dummy_checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }

    async fn verify_dummy(&self, _password: &str) {
        self.dummy_checks.fetch_add(1, Ordering::SeqCst);
    }
}

/// トークン文字列にユーザー ID と名前をそのまま埋め込むトークンマネージャー
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Ok(AuthTokenDto {
            token: token_for(i64::from(subject.user_id), &subject.username),
            issued_at: fixed_now(),
            expires_at: fixed_now() + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let invalid = || ApplicationError::unauthorized("invalid token");
        let rest = token.strip_prefix("user-").ok_or_else(invalid)?;
        let (id, username) = rest.split_once(':').ok_or_else(invalid)?;
        let id: i64 = id.parse().map_err(|_| invalid())?;
        if id <= 0 || username.is_empty() {
            return Err(invalid());
        }
        Ok(actor(id, username))
    }
}
