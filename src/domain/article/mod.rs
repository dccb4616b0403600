pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleFilter, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleContent, ArticleId, ArticlePublicId, ArticleSlug, ArticleStatus, ArticleTitle,
    ImageUrl,
};
