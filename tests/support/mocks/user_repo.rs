// tests/support/mocks/user_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::pagination::PageRequest;
use quill_core::domain::user::{
    DisplayName, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate, Username,
};

use super::time::fixed_now;

/// メモリ上のユーザーリポジトリ。ユーザー名の一意制約を再現する。
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    /// alice (id 1) と bob (id 2) を登録済みの状態で作る。パスワードはどちらも "password123"。
    pub fn seeded() -> Self {
        let repo = Self::default();
        repo.push("alice", "Alice");
        repo.push("bob", "Bob");
        repo
    }

    fn push(&self, username: &str, name: &str) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: UserId::new(users.len() as i64 + 1).unwrap(),
            username: Username::new(username).unwrap(),
            display_username: username.into(),
            name: DisplayName::new(name).unwrap(),
            image: None,
            password_hash: PasswordHash::new("hashed:password123").unwrap(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        };
        users.push(user.clone());
        user
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: UserId::new(users.len() as i64 + 1).unwrap(),
            username: new_user.username,
            display_username: new_user.display_username,
            name: new_user.name,
            image: None,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(image) = update.image {
            user.image = image;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().filter(|u| ids.contains(&u.id)).cloned().collect())
    }

    async fn list_page(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<(Vec<User>, u64)> {
        let users = self.users.lock().unwrap();
        let needle = search.map(str::to_lowercase);
        let mut matching: Vec<User> = users
            .iter()
            .filter(|u| match &needle {
                Some(n) => {
                    u.username.as_str().contains(n.as_str())
                        || u.name.as_str().to_lowercase().contains(n.as_str())
                }
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }
}
