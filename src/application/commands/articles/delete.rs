// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub public_id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self
            .load_owned_article(actor, &command.public_id, "delete")
            .await?;

        self.write_repo.delete(article.id).await?;
        tracing::info!(article = %article.public_id, "article deleted");
        Ok(())
    }
}
