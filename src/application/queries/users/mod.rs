mod authors;
mod profile;
mod service;

pub use authors::ListAuthorsQuery;
pub use service::UserQueryService;
