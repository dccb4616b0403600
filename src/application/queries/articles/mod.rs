mod get;
mod list;
mod service;

pub use get::GetArticleQuery;
pub use list::{ListArticlesQuery, ListOwnArticlesQuery};
pub use service::ArticleQueryService;
