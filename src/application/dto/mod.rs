pub mod articles;
pub mod auth;
pub mod pagination;
pub mod users;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use pagination::{Page, PaginationMeta};
pub use users::{AuthorDto, UserDto, UserProfileDto};
