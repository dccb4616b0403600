// src/domain/user/entity.rs
use crate::domain::article::ImageUrl;
use crate::domain::user::value_objects::{DisplayName, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub display_username: String,
    pub name: DisplayName,
    pub image: Option<ImageUrl>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub display_username: String,
    pub name: DisplayName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        display_username: impl Into<String>,
        name: DisplayName,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            display_username: display_username.into().trim().to_string(),
            name,
            password_hash,
            created_at,
        }
    }
}

/// Profile changes. `image: Some(None)` removes the avatar.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub name: Option<DisplayName>,
    pub image: Option<Option<ImageUrl>>,
    pub updated_at: DateTime<Utc>,
}

impl UserUpdate {
    pub fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            image: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: DisplayName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_image(mut self, image: Option<ImageUrl>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none()
    }
}
