use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Article slugs via the `slug` crate: ASCII, lowercase, `-` separated.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_titles_become_ascii_slugs() {
        assert_eq!(DefaultSlugGenerator.slugify("Été à Paris"), "ete-a-paris");
    }
}
