// src/infrastructure/publishers/slug.rs
//! Slugs for remote taxonomy terms (WordPress categories and tags).
use unicode_normalization::UnicodeNormalization;

/// Lowercases, decomposes to NFD and strips the combining marks, turns
/// whitespace runs into `-` and drops anything outside `[a-z0-9-_]`.
pub fn taxonomy_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.to_lowercase().nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if matches!(ch, 'a'..='z' | '0'..='9' | '-' | '_') {
            slug.push(ch);
        }
    }
    slug
}

const fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{300}'..='\u{36f}')
}
