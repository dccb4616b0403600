// src/application/commands/articles/service.rs
use std::{future::Future, sync::Arc};

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        errors::DomainResult,
        user::{UserId, UserRepository},
    },
};

/// Number of times a write is attempted when a concurrent writer takes the
/// computed slug first.
pub const MAX_SLUG_ATTEMPTS: usize = 2;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            slug_service,
            clock,
        }
    }

    /// Generates a slug for `title` and hands it to `write`. When the storage
    /// layer reports a slug conflict the slug is regenerated from a fresh read
    /// and the write is retried, up to `MAX_SLUG_ATTEMPTS` writes in total.
    pub(super) async fn write_with_unique_slug<T, F, Fut>(
        &self,
        title: &ArticleTitle,
        author_id: UserId,
        ignore_id: Option<ArticleId>,
        mut write: F,
    ) -> ApplicationResult<T>
    where
        F: FnMut(ArticleSlug) -> Fut,
        Fut: Future<Output = DomainResult<T>>,
    {
        let mut attempt = 1;
        loop {
            let slug = self
                .slug_service
                .generate_unique_slug(title, author_id, ignore_id)
                .await?;

            match write(slug.clone()).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_slug_conflict() && attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::warn!(
                        author_id = %author_id,
                        slug = %slug,
                        attempt,
                        "slug taken by a concurrent write, regenerating"
                    );
                    attempt += 1;
                }
                Err(err) if err.is_slug_conflict() => {
                    tracing::warn!(author_id = %author_id, slug = %slug, "giving up on slug after retry");
                    return Err(ApplicationError::conflict(format!(
                        "slug '{slug}' was taken by a concurrent request, please retry"
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
