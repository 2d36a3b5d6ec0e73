//! URL-safe identifiers for posts, categories and tags.

use slug::slugify;
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[error("generated slug is empty")]
pub struct EmptySlug;

/// A non-empty, trimmed slug.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Wrap a literal known to be a valid slug.
    pub(crate) fn literal(value: &'static str) -> Self {
        debug_assert!(!value.trim().is_empty(), "slug literal must not be blank");
        Self(value.to_string())
    }

    /// Derive a slug from a human-readable title.
    ///
    /// # Errors
    /// Returns [`EmptySlug`] when nothing slug-worthy is left, e.g. a title made of punctuation.
    pub fn from_title(title: &str) -> Result<Self, EmptySlug> {
        let generated = slugify(title);
        Self::from_str(&generated)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Slug {
    type Err = EmptySlug;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EmptySlug);
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for Slug {
    type Error = EmptySlug;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Derive the slug of a raw tag string.
///
/// Lowercases the tag and joins whitespace-separated words with `-`. Punctuation is kept,
/// so `"C++ Tips"` becomes `c++-tips`. Differently-cased spellings collapse to one slug.
#[must_use]
pub fn tag_slug(tag: &str) -> String {
    tag.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
