// src/infrastructure/repositories/postgres_article.rs
use super::{escape_like, map_sqlx};
use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticlePublicId, ArticleReadRepository,
    ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, ImageUrl,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str = "id, public_id, title, slug, content, excerpt, status, cover_image, \
     author_id, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    public_id: Uuid,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    status: String,
    cover_image: Option<String>,
    author_id: i64,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            public_id: ArticlePublicId::from_uuid(row.public_id),
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content),
            excerpt: row.excerpt,
            status: row.status.parse::<ArticleStatus>()?,
            cover_image: row.cover_image.map(ImageUrl::new).transpose()?,
            author_id: UserId::new(row.author_id)?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            public_id,
            title,
            slug,
            content,
            excerpt,
            status,
            cover_image,
            author_id,
            published_at,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (public_id, title, slug, content, excerpt, status, cover_image, \
             author_id, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(public_id.as_uuid())
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt)
        .bind(status.as_str())
        .bind(cover_image.map(ImageUrl::into_inner))
        .bind(i64::from(author_id))
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            status,
            cover_image,
            published_at,
            original_updated_at,
            updated_at,
        } = update;

        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles
             SET title = $1, slug = $2, content = $3, excerpt = $4, status = $5,
                 cover_image = $6, published_at = $7, updated_at = $8
             WHERE id = $9 AND updated_at = $10
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt)
        .bind(status.as_str())
        .bind(cover_image.map(ImageUrl::into_inner))
        .bind(published_at)
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(original_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &ArticleFilter) {
        let mut has_where = false;
        let mut push_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };

        if let Some(author_id) = filter.author_id {
            push_clause(builder);
            builder.push("author_id = ");
            builder.push_bind(i64::from(author_id));
        }

        if let Some(status) = filter.status {
            push_clause(builder);
            builder.push("status = ");
            builder.push_bind(status.as_str());
        }

        if let Some(search) = filter.search.as_deref() {
            push_clause(builder);
            builder.push("title ILIKE ");
            builder.push_bind(format!("%{}%", escape_like(search)));
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_public_id(
        &self,
        public_id: ArticlePublicId,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE public_id = $1"
        ))
        .bind(public_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_author_and_slug(
        &self,
        author_id: UserId,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE author_id = $1 AND slug = $2"
        ))
        .bind(i64::from(author_id))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_slugs_with_base(
        &self,
        author_id: UserId,
        base: &str,
    ) -> DomainResult<Vec<(ArticleId, ArticleSlug)>> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, slug FROM articles
             WHERE author_id = $1 AND (slug = $2 OR slug LIKE $3)",
        )
        .bind(i64::from(author_id))
        .bind(base)
        .bind(format!("{}-%", escape_like(base)))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(id, slug)| Ok((ArticleId::new(id)?, ArticleSlug::new(slug)?)))
            .collect()
    }

    async fn list_page(
        &self,
        filter: ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_conditions(&mut count, &filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_conditions(&mut builder, &filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total.max(0) as u64))
    }
}
