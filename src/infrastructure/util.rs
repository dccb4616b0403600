use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Transliterates to ASCII, lowercases, and collapses every run of other
/// characters into one hyphen.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
