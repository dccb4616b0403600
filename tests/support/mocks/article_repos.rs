// tests/support/mocks/article_repos.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quill_core::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticlePublicId, ArticleReadRepository,
    ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::pagination::PageRequest;
use quill_core::domain::user::UserId;

/* -------------------------------- InMemoryArticleStore -------------------------------- */

/// メモリ上の記事ストア。読み書き両方のリポジトリを実装し、
/// `(author_id, slug)` の一意制約と `updated_at` による楽観ロックを再現する。
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
}

impl InMemoryArticleStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 既存記事を直接登録する（制約チェックなし）
    pub fn seed(&self, article: Article) {
        let mut articles = self.articles.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(article.id.0);
        articles.push(article);
    }

    pub fn all(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    pub fn slugs_of(&self, author_id: i64) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|a| a.author_id.0 == author_id)
            .map(|a| a.slug.into_inner())
            .collect()
    }

    fn slug_taken(
        articles: &[Article],
        author_id: UserId,
        slug: &ArticleSlug,
        except: Option<ArticleId>,
    ) -> bool {
        articles
            .iter()
            .any(|a| a.author_id == author_id && &a.slug == slug && Some(a.id) != except)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if Self::slug_taken(&articles, new.author_id, &new.slug, None) {
            return Err(DomainError::SlugConflict(format!("slug {} taken", new.slug)));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let article = Article {
            id: ArticleId::new(*next_id).unwrap(),
            public_id: new.public_id,
            title: new.title,
            slug: new.slug,
            content: new.content,
            excerpt: new.excerpt,
            status: new.status,
            cover_image: new.cover_image,
            author_id: new.author_id,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let index = articles
            .iter()
            .position(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if articles[index].updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("article update conflict, please retry".into()));
        }
        let author_id = articles[index].author_id;
        if Self::slug_taken(&articles, author_id, &update.slug, Some(update.id)) {
            return Err(DomainError::SlugConflict(format!("slug {} taken", update.slug)));
        }

        let article = &mut articles[index];
        article.title = update.title;
        article.slug = update.slug;
        article.content = update.content;
        article.excerpt = update.excerpt;
        article.status = update.status;
        article.cover_image = update.cover_image;
        article.published_at = update.published_at;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_public_id(&self, public_id: ArticlePublicId) -> DomainResult<Option<Article>> {
        Ok(self.all().into_iter().find(|a| a.public_id == public_id))
    }

    async fn find_by_author_and_slug(
        &self,
        author_id: UserId,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        Ok(self
            .all()
            .into_iter()
            .find(|a| a.author_id == author_id && &a.slug == slug))
    }

    async fn find_slugs_with_base(
        &self,
        author_id: UserId,
        base: &str,
    ) -> DomainResult<Vec<(ArticleId, ArticleSlug)>> {
        let prefix = format!("{base}-");
        Ok(self
            .all()
            .into_iter()
            .filter(|a| a.author_id == author_id)
            .filter(|a| a.slug.as_str() == base || a.slug.as_str().starts_with(&prefix))
            .map(|a| (a.id, a.slug))
            .collect())
    }

    async fn list_page(
        &self,
        filter: ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut matching: Vec<Article> = self
            .all()
            .into_iter()
            .filter(|a| filter.author_id.is_none_or(|id| a.author_id == id))
            .filter(|a| filter.status.is_none_or(|s| a.status == s))
            .filter(|a| {
                needle
                    .as_deref()
                    .is_none_or(|n| a.title.as_str().to_lowercase().contains(n))
            })
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }
}

/* -------------------------------- RacingArticleWrite -------------------------------- */

/// 書き込みの直前に、同じ著者・同じスラグの記事を競合相手として割り込ませるラッパー。
/// `races` 回だけ割り込みが発生する。
pub struct RacingArticleWrite {
    store: Arc<InMemoryArticleStore>,
    races: Mutex<usize>,
}

impl RacingArticleWrite {
    pub fn new(store: Arc<InMemoryArticleStore>, races: usize) -> Self {
        Self {
            store,
            races: Mutex::new(races),
        }
    }

    async fn maybe_race(&self, author_id: UserId, slug: &ArticleSlug, now: DateTime<Utc>) {
        let should_race = {
            let mut races = self.races.lock().unwrap();
            if *races > 0 {
                *races -= 1;
                true
            } else {
                false
            }
        };
        if should_race {
            let competitor = NewArticle::new(
                ArticleTitle::new("competing writer").unwrap(),
                slug.clone(),
                ArticleContent::new("faster"),
                ArticleStatus::Draft,
                None,
                author_id,
                now,
            )
            .unwrap();
            self.store.insert(competitor).await.unwrap();
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for RacingArticleWrite {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        self.maybe_race(new.author_id, &new.slug, new.created_at).await;
        self.store.insert(new).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let author_id = self
            .store
            .all()
            .into_iter()
            .find(|a| a.id == update.id)
            .map(|a| a.author_id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        self.maybe_race(author_id, &update.slug, update.updated_at).await;
        self.store.update(update).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.store.delete(id).await
    }
}
