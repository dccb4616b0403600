// src/application/services/article_authors.rs
use std::collections::HashMap;

use crate::{
    application::{
        dto::{ArticleDto, AuthorDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        user::{UserId, UserRepository},
    },
};

fn missing_author(author_id: UserId) -> ApplicationError {
    ApplicationError::infrastructure(format!("author {author_id} of article not found"))
}

/// Attaches the public author profile to one article.
pub(crate) async fn with_author(
    user_repo: &dyn UserRepository,
    article: Article,
) -> ApplicationResult<ArticleDto> {
    let author = user_repo
        .find_by_id(article.author_id)
        .await?
        .ok_or_else(|| missing_author(article.author_id))?;
    Ok(ArticleDto::new(article, author.into()))
}

/// Same as [`with_author`] for a page of articles, with one user lookup.
pub(crate) async fn with_authors(
    user_repo: &dyn UserRepository,
    articles: Vec<Article>,
) -> ApplicationResult<Vec<ArticleDto>> {
    let mut ids: Vec<UserId> = articles.iter().map(|a| a.author_id).collect();
    ids.sort_by_key(|id| id.0);
    ids.dedup();

    let authors: HashMap<UserId, AuthorDto> = user_repo
        .find_by_ids(&ids)
        .await?
        .into_iter()
        .map(|user| (user.id, AuthorDto::from(user)))
        .collect();

    articles
        .into_iter()
        .map(|article| {
            let author_id = article.author_id;
            authors
                .get(&author_id)
                .cloned()
                .map(|author| ArticleDto::new(article, author))
                .ok_or_else(|| missing_author(author_id))
        })
        .collect()
}
