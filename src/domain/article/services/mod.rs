// src/domain/article/services/mod.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;

/// Domain service responsible for producing slugs that are unique among the
/// articles of one author.
///
/// The check is a read followed by an in-memory decision. It is not atomic:
/// two concurrent writers can compute the same slug, and the storage layer's
/// `(author_id, slug)` constraint settles the race.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Slug for `title` within `author_id`'s articles. The slug held by
    /// `ignore_id` does not count as taken, so renaming an article to a title
    /// with the same base keeps its current slug.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        author_id: UserId,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());

        let taken: HashSet<String> = if base.is_empty() {
            HashSet::new()
        } else {
            self.read_repo
                .find_slugs_with_base(author_id, &base)
                .await?
                .into_iter()
                .filter(|(id, _)| Some(*id) != ignore_id)
                .map(|(_, slug)| slug.into_inner())
                .collect()
        };

        ArticleSlug::new(unique_slug(&base, &taken))
    }
}

/// First candidate of `base`, `base-2`, `base-3`, ... that is not in `taken`.
pub fn unique_slug(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }

    let mut suffix: u64 = 2;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
