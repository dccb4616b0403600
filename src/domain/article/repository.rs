use crate::domain::article::entity::{Article, ArticleFilter, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticlePublicId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::SlugConflict` when the author already owns
    /// an article with the same slug.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_public_id(&self, public_id: ArticlePublicId)
    -> DomainResult<Option<Article>>;
    async fn find_by_author_and_slug(
        &self,
        author_id: UserId,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>>;
    /// Slugs owned by `author_id` that equal `base` or start with `base-`.
    async fn find_slugs_with_base(
        &self,
        author_id: UserId,
        base: &str,
    ) -> DomainResult<Vec<(ArticleId, ArticleSlug)>>;
    /// One page of matching articles, newest first, plus the total match count.
    async fn list_page(
        &self,
        filter: ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)>;
}
