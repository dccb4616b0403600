// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// セキュリティ関連
pub use security::{
    AUTHOR_TOKEN, DummyPasswordHasher, DummyTokenManager, OTHER_TOKEN, actor, token_for,
};

// ユーティリティ関連
pub use util::{CountingSlug, DummyClock};

// ユーザーリポジトリ
pub use user_repo::InMemoryUserRepo;

// 記事リポジトリ
pub use article_repos::{InMemoryArticleStore, RacingArticleWrite};
