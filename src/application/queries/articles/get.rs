use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        services::article_authors::with_author,
    },
    domain::article::{
        ArticlePublicId, ArticleSlug,
        specifications::{ArticleSpecification, CanViewArticleSpec},
    },
};

pub struct GetArticleQuery {
    pub public_id: String,
}

impl ArticleQueryService {
    /// Drafts and archived articles of other authors are reported as missing.
    pub async fn get_by_public_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let public_id = ArticlePublicId::parse(&query.public_id)?;
        let article = self
            .read_repo
            .find_by_public_id(public_id)
            .await?
            .filter(|article| CanViewArticleSpec::new(article, actor.map(|a| a.id)).is_satisfied())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        with_author(self.user_repo.as_ref(), article).await
    }

    /// Public permalink lookup. Only published articles resolve.
    pub async fn get_by_author_slug(
        &self,
        username: &str,
        slug: &str,
    ) -> ApplicationResult<ArticleDto> {
        let author = self.find_author(username).await?;
        let not_found = || ApplicationError::not_found("article not found");
        let slug = ArticleSlug::new(slug).map_err(|_| not_found())?;

        let article = self
            .read_repo
            .find_by_author_and_slug(author.id, &slug)
            .await?
            .filter(|article| article.is_published())
            .ok_or_else(not_found)?;

        Ok(ArticleDto::new(article, author.into()))
    }
}
