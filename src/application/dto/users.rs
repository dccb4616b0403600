use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::AuthenticatedUser;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub display_username: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            display_username: user.display_username,
            name: user.name.into(),
            image: user.image.map(|image| image.into_inner()),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Public view of an author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDto {
    pub username: String,
    pub display_username: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AuthorDto {
    fn from(user: User) -> Self {
        Self {
            username: user.username.into(),
            display_username: user.display_username,
            name: user.name.into(),
            image: user.image.map(|image| image.into_inner()),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub user: UserDto,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl UserProfileDto {
    pub fn from_parts(user: User, auth: &AuthenticatedUser, now: DateTime<Utc>) -> Self {
        let expires_in = auth
            .expires_at
            .signed_duration_since(now)
            .num_seconds()
            .max(0);

        Self {
            user: user.into(),
            expires_at: auth.expires_at,
            expires_in,
        }
    }
}
