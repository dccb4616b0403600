// tests/support/builders.rs
use quill_core::domain::article::*;
use quill_core::domain::user::UserId;

use super::mocks::fixed_now;

/// ストアへ直接シードする記事を組み立てる
pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    status: ArticleStatus,
    author_id: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            content: "Test body".into(),
            status: ArticleStatus::Draft,
            author_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Published;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn build(self) -> Article {
        let content = ArticleContent::new(self.content);
        let published = self.status == ArticleStatus::Published;
        Article {
            id: ArticleId::new(self.id).unwrap(),
            public_id: ArticlePublicId::generate(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            excerpt: content.excerpt(),
            content,
            status: self.status,
            cover_image: None,
            author_id: UserId::new(self.author_id).unwrap(),
            published_at: published.then(fixed_now),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
