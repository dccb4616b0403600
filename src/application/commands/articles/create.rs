// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        services::article_authors::with_author,
    },
    domain::article::{ArticleContent, ArticleStatus, ArticleTitle, ImageUrl, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
    pub cover_image: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: String,
    status: ArticleStatus,
    cover_image: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content,
            status: self.status,
            cover_image: self.cover_image,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content);
        let cover_image = command.cover_image.map(ImageUrl::new).transpose()?;
        let now = self.clock.now();

        let status = command.status;
        let author_id = actor.id;
        let write_repo = &self.write_repo;
        let created = self
            .write_with_unique_slug(&title, author_id, None, |slug| {
                let draft = NewArticle::new(
                    title.clone(),
                    slug,
                    content.clone(),
                    status,
                    cover_image.clone(),
                    author_id,
                    now,
                );
                async move { write_repo.insert(draft?).await }
            })
            .await?;

        tracing::info!(
            article = %created.public_id,
            slug = %created.slug,
            author_id = %created.author_id,
            "article created"
        );
        with_author(self.user_repo.as_ref(), created).await
    }
}
