// src/application/commands/articles/ownership.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticlePublicId,
        specifications::{ArticleSpecification, CanModifyArticleSpec},
    },
};

impl ArticleCommandService {
    /// Loads the article addressed by `public_id` and checks that `actor`
    /// owns it.
    pub(super) async fn load_owned_article(
        &self,
        actor: &AuthenticatedUser,
        public_id: &str,
        action: &str,
    ) -> ApplicationResult<Article> {
        let public_id = ArticlePublicId::parse(public_id)?;
        let article = self
            .read_repo
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanModifyArticleSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "only the author may {action} this article"
            )));
        }

        Ok(article)
    }
}
