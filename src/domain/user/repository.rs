use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the username is taken.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Users among `ids`, in no particular order. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;

    /// Authors ordered by username; `search` matches username or name.
    async fn list_page(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<(Vec<User>, u64)>;
}
