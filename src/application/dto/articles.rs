use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::AuthorDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub public_id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub status: ArticleStatus,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub author: AuthorDto,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn new(article: Article, author: AuthorDto) -> Self {
        Self {
            public_id: article.public_id.to_string(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            excerpt: article.excerpt,
            status: article.status,
            cover_image: article.cover_image.map(|image| image.into_inner()),
            author,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
