// src/application/ports/util.rs
/// Turns an article title into its URL slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
