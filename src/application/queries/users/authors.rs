use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthorDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{pagination::PageRequest, user::Username},
};

#[derive(Debug, Clone, Default)]
pub struct ListAuthorsQuery {
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UserQueryService {
    pub async fn list_authors(&self, query: ListAuthorsQuery) -> ApplicationResult<Page<AuthorDto>> {
        let request = PageRequest::new(query.page, query.limit)?;
        let search = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let (users, total) = self.user_repo.list_page(search, request).await?;
        let items = users.into_iter().map(Into::into).collect();
        Ok(Page::new(items, request, total))
    }

    pub async fn get_author(&self, username: &str) -> ApplicationResult<AuthorDto> {
        let not_found = || ApplicationError::not_found("author not found");
        let username = Username::new(username).map_err(|_| not_found())?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(not_found)?;

        Ok(user.into())
    }
}
