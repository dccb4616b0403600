use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::ArticleReadRepository,
        user::{User, UserRepository, Username},
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            user_repo,
        }
    }

    /// Any username that cannot exist reads as an unknown author.
    pub(super) async fn find_author(&self, username: &str) -> ApplicationResult<User> {
        let not_found = || ApplicationError::not_found("author not found");
        let username = Username::new(username).map_err(|_| not_found())?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(not_found)
    }
}
