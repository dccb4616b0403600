// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        services::article_authors::with_author,
    },
    domain::article::{ArticleContent, ArticleStatus, ArticleTitle, ArticleUpdate, ImageUrl},
};

pub struct UpdateArticleCommand {
    pub public_id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    /// `Some(None)` removes the cover image.
    pub cover_image: Option<Option<String>>,
}

impl UpdateArticleCommand {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.status.is_none()
            && self.cover_image.is_none()
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        if command.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let mut article = self
            .load_owned_article(actor, &command.public_id, "update")
            .await?;

        let UpdateArticleCommand {
            public_id: _,
            title,
            content,
            status,
            cover_image,
        } = command;

        let new_title = title.map(ArticleTitle::new).transpose()?;
        let cover_image = cover_image
            .map(|image| image.map(ImageUrl::new).transpose())
            .transpose()?;

        let original_updated_at = article.updated_at;
        let now = self.clock.now();

        if let Some(content) = content {
            article.set_content(ArticleContent::new(content), now);
        }
        if let Some(status) = status {
            article.set_status(status, now)?;
        }
        if let Some(cover_image) = cover_image {
            article.set_cover_image(cover_image, now);
        }
        article.ensure_consistent()?;
        article.updated_at = now;

        let renamed = new_title.filter(|title| *title != article.title);

        let updated = match renamed {
            None => {
                let update = ArticleUpdate::from_article(&article, original_updated_at);
                self.write_repo.update(update).await?
            }
            Some(title) => {
                let write_repo = &self.write_repo;
                let current = &article;
                let updated = self
                    .write_with_unique_slug(&title, article.author_id, Some(article.id), |slug| {
                        let mut renamed = current.clone();
                        renamed.rename(title.clone(), slug, now);
                        let update = ArticleUpdate::from_article(&renamed, original_updated_at);
                        async move { write_repo.update(update).await }
                    })
                    .await?;
                tracing::info!(
                    article = %updated.public_id,
                    slug = %updated.slug,
                    "article renamed"
                );
                updated
            }
        };

        with_author(self.user_repo.as_ref(), updated).await
    }
}
