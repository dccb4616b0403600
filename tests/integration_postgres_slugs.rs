use std::sync::Arc;

use chrono::Utc;
use quill_core::domain::article::{
    ArticleContent, ArticleReadRepository, ArticleSlug, ArticleStatus, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use quill_core::domain::errors::DomainError;
use quill_core::domain::user::{
    DisplayName, NewUser, PasswordHash, User, UserRepository, Username,
};
use quill_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresUserRepository,
    },
};
use sqlx::PgPool;

/// RUN_DB_INTEGRATION=1 と DATABASE_URL が設定されているときだけプールを返す
async fn pool_or_skip() -> Option<PgPool> {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return None;
    }
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(&database_url, 4)
        .await
        .expect("init pool");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    Some(pool)
}

async fn create_user(users: &PostgresUserRepository) -> User {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let username = format!("it_{}", &suffix[..12]);
    users
        .insert(NewUser::new(
            Username::new(&username).unwrap(),
            &username,
            DisplayName::new("Integration").unwrap(),
            PasswordHash::new("hashed").unwrap(),
            Utc::now(),
        ))
        .await
        .expect("insert user")
}

fn article(author: &User, slug: &str) -> NewArticle {
    NewArticle::new(
        ArticleTitle::new(slug).unwrap(),
        ArticleSlug::new(slug).unwrap(),
        ArticleContent::new("body"),
        ArticleStatus::Draft,
        None,
        author.id,
        Utc::now(),
    )
    .unwrap()
}

async fn cleanup(pool: &PgPool, authors: &[&User]) {
    let ids: Vec<i64> = authors.iter().map(|u| i64::from(u.id)).collect();
    sqlx::query("DELETE FROM users WHERE id = ANY($1)")
        .bind(ids)
        .execute(pool)
        .await
        .expect("cleanup");
}

/// 実 DB のスラグ前方一致検索が著者ごとに base と base- で始まるものだけを返すことを確認する
#[tokio::test]
async fn integration_find_slugs_with_base_is_scoped_per_author() {
    let Some(pool) = pool_or_skip().await else {
        return;
    };
    let users = PostgresUserRepository::new(pool.clone());
    let writes = PostgresArticleWriteRepository::new(pool.clone());
    let reads: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));

    let alice = create_user(&users).await;
    let bob = create_user(&users).await;

    for slug in ["base", "base-2", "base-x", "basement", "other"] {
        writes.insert(article(&alice, slug)).await.expect("insert");
    }
    writes.insert(article(&bob, "base-3")).await.expect("insert");

    let mut found: Vec<String> = reads
        .find_slugs_with_base(alice.id, "base")
        .await
        .expect("find slugs")
        .into_iter()
        .map(|(_, slug)| slug.into_inner())
        .collect();
    found.sort();

    cleanup(&pool, &[&alice, &bob]).await;
    assert_eq!(found, ["base", "base-2", "base-x"]);
}

/// 同じ著者の同じスラグは SlugConflict として報告されることを確認する
#[tokio::test]
async fn integration_duplicate_slug_is_slug_conflict() {
    let Some(pool) = pool_or_skip().await else {
        return;
    };
    let users = PostgresUserRepository::new(pool.clone());
    let writes = PostgresArticleWriteRepository::new(pool.clone());

    let alice = create_user(&users).await;
    let bob = create_user(&users).await;

    writes.insert(article(&alice, "dup")).await.expect("insert");
    let second = writes.insert(article(&alice, "dup")).await;
    let other_author = writes.insert(article(&bob, "dup")).await;

    cleanup(&pool, &[&alice, &bob]).await;
    assert!(matches!(second, Err(DomainError::SlugConflict(_))));
    assert!(other_author.is_ok());
}

/// 複数 ID の一括取得で存在するユーザーだけが返ることを確認する
#[tokio::test]
async fn integration_find_users_by_ids() {
    let Some(pool) = pool_or_skip().await else {
        return;
    };
    let users = PostgresUserRepository::new(pool.clone());

    let alice = create_user(&users).await;
    let bob = create_user(&users).await;

    let mut found: Vec<i64> = users
        .find_by_ids(&[alice.id, bob.id])
        .await
        .expect("find by ids")
        .into_iter()
        .map(|u| i64::from(u.id))
        .collect();
    found.sort();
    let empty = users.find_by_ids(&[]).await.expect("empty lookup");

    cleanup(&pool, &[&alice, &bob]).await;
    let mut expected = vec![i64::from(alice.id), i64::from(bob.id)];
    expected.sort();
    assert_eq!(found, expected);
    assert!(empty.is_empty());
}
