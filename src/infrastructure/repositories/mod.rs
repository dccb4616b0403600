// src/infrastructure/repositories/mod.rs
mod error;
mod like;
mod postgres_article;
mod postgres_user;

pub(crate) use error::map_sqlx;
use like::escape_like;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_user::PostgresUserRepository;
