use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, Page},
        error::ApplicationResult,
        services::article_authors::with_authors,
    },
    domain::{
        article::{ArticleFilter, ArticleStatus},
        pagination::PageRequest,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct ListOwnArticlesQuery {
    /// `None` lists every status.
    pub status: Option<ArticleStatus>,
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    /// Published articles of every author, newest first.
    pub async fn list_published(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let request = PageRequest::new(query.page, query.limit)?;
        let filter = ArticleFilter::published().with_search(query.q);
        self.fetch_page(filter, request).await
    }

    /// Published articles of one author.
    pub async fn list_author_articles(
        &self,
        username: &str,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let request = PageRequest::new(query.page, query.limit)?;
        let author = self.find_author(username).await?;
        let filter = ArticleFilter::published()
            .by_author(author.id)
            .with_search(query.q);
        self.fetch_page(filter, request).await
    }

    /// The caller's own articles, drafts included.
    pub async fn list_own_articles(
        &self,
        actor: &AuthenticatedUser,
        query: ListOwnArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let request = PageRequest::new(query.page, query.limit)?;
        let filter = ArticleFilter::default()
            .by_author(actor.id)
            .with_status(query.status)
            .with_search(query.q);
        self.fetch_page(filter, request).await
    }

    async fn fetch_page(
        &self,
        filter: ArticleFilter,
        request: PageRequest,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let (articles, total) = self.read_repo.list_page(filter, request).await?;
        let items = with_authors(self.user_repo.as_ref(), articles).await?;
        Ok(Page::new(items, request, total))
    }
}
