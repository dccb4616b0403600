// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase ASCII letters and digits joined by single hyphens, without
    /// leading or trailing hyphens. May be empty.
    fn slugify(&self, input: &str) -> String;
}
