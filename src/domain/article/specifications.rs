use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Only the owning author may change or delete an article.
pub struct CanModifyArticleSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanModifyArticleSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }
}

impl ArticleSpecification for CanModifyArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_owned_by(self.user_id)
    }
}

/// Published articles are public; anything else is visible to its author only.
pub struct CanViewArticleSpec<'a> {
    article: &'a Article,
    viewer: Option<UserId>,
}

impl<'a> CanViewArticleSpec<'a> {
    pub fn new(article: &'a Article, viewer: Option<UserId>) -> Self {
        Self { article, viewer }
    }
}

impl ArticleSpecification for CanViewArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_published()
            || self
                .viewer
                .map(|id| self.article.is_owned_by(id))
                .unwrap_or(false)
    }
}
