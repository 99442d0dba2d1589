//! URL slug derivation for products.

use std::fmt;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalized, URL-safe product identifier derived from the product and brand names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from `name`, `brand_name` and a trailing disambiguator.
    ///
    /// The disambiguator is a timestamp while the product id is still unknown,
    /// and the product id afterwards.
    pub fn generate(name: &str, brand_name: &str, disambiguator: impl fmt::Display) -> Self {
        let base = normalize(&format!("{name}-{brand_name}"));
        Self(format!("{base}-{disambiguator}"))
    }

    /// Append `-suffix` in place. Used to force uniqueness on collisions.
    pub fn append(&mut self, suffix: impl fmt::Display) {
        self.0.push('-');
        self.0.push_str(&suffix.to_string());
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Restore a slug that was produced by [`Slug::generate`] and stored.
    pub(crate) fn from_persisted(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shorthand for [`Slug::generate`].
pub fn generate_slug(name: &str, brand_name: &str, disambiguator: impl fmt::Display) -> Slug {
    Slug::generate(name, brand_name, disambiguator)
}

fn normalize(input: &str) -> String {
    let stripped: String = input
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '-') || ch.is_whitespace())
        .collect();

    let mut slug = String::with_capacity(stripped.len());
    let mut previous_hyphen = false;
    for ch in stripped.chars() {
        if ch == '-' || ch.is_whitespace() {
            if !previous_hyphen {
                slug.push('-');
                previous_hyphen = true;
            }
        } else {
            slug.push(ch);
            previous_hyphen = false;
        }
    }

    slug.trim_matches('-').to_string()
}
