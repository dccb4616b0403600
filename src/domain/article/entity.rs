// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticlePublicId, ArticleSlug, ArticleStatus, ArticleTitle,
    ImageUrl,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub public_id: ArticlePublicId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: String,
    pub status: ArticleStatus,
    pub cover_image: Option<ImageUrl>,
    pub author_id: UserId,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Move the article to `status`. Entering `published` requires content
    /// and stamps `published_at`; going back to `draft` clears it.
    pub fn set_status(&mut self, status: ArticleStatus, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == status {
            return Ok(());
        }

        match status {
            ArticleStatus::Published => {
                ensure_publishable(&self.content)?;
                self.published_at = Some(now);
            }
            ArticleStatus::Draft => self.published_at = None,
            ArticleStatus::Archived => {}
        }

        self.status = status;
        self.updated_at = now;
        Ok(())
    }

    pub fn rename(&mut self, title: ArticleTitle, slug: ArticleSlug, now: DateTime<Utc>) {
        self.title = title;
        self.slug = slug;
        self.updated_at = now;
    }

    /// Replaces the body and its excerpt. Call `ensure_consistent` once all
    /// edits of a request are applied.
    pub fn set_content(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.excerpt = content.excerpt();
        self.content = content;
        self.updated_at = now;
    }

    pub fn ensure_consistent(&self) -> DomainResult<()> {
        if self.is_published() {
            ensure_publishable(&self.content)?;
        }
        Ok(())
    }

    pub fn set_cover_image(&mut self, cover_image: Option<ImageUrl>, now: DateTime<Utc>) {
        self.cover_image = cover_image;
        self.updated_at = now;
    }
}

fn ensure_publishable(content: &ArticleContent) -> DomainResult<()> {
    if content.is_blank() {
        return Err(DomainError::Validation(
            "published articles require content".into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub public_id: ArticlePublicId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: String,
    pub status: ArticleStatus,
    pub cover_image: Option<ImageUrl>,
    pub author_id: UserId,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        title: ArticleTitle,
        slug: ArticleSlug,
        content: ArticleContent,
        status: ArticleStatus,
        cover_image: Option<ImageUrl>,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let published_at = if status == ArticleStatus::Published {
            ensure_publishable(&content)?;
            Some(now)
        } else {
            None
        };

        Ok(Self {
            public_id: ArticlePublicId::generate(),
            title,
            slug,
            excerpt: content.excerpt(),
            content,
            status,
            cover_image,
            author_id,
            published_at,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Full replacement of the mutable columns of one article, guarded by the
/// `updated_at` value the caller read.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: String,
    pub status: ArticleStatus,
    pub cover_image: Option<ImageUrl>,
    pub published_at: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn from_article(article: &Article, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            slug: article.slug.clone(),
            content: article.content.clone(),
            excerpt: article.excerpt.clone(),
            status: article.status,
            cover_image: article.cover_image.clone(),
            published_at: article.published_at,
            original_updated_at,
            updated_at: article.updated_at,
        }
    }
}

/// Filter for listing articles.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub author_id: Option<UserId>,
    pub status: Option<ArticleStatus>,
    pub search: Option<String>,
}

impl ArticleFilter {
    pub fn published() -> Self {
        Self {
            status: Some(ArticleStatus::Published),
            ..Self::default()
        }
    }

    pub fn by_author(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_status(mut self, status: Option<ArticleStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }
}
