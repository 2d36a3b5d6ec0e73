//! Seed content read from a TOML file.
//!
//! ```toml
//! [[authors]]
//! id = "maya-okafor"
//! name = "Maya Okafor"
//! slug = "maya-okafor"
//! avatar = "/images/team/maya-okafor.jpg"
//! bio = "Founder"
//!
//! [[categories]]
//! id = "analytics"
//! name = "Analytics"
//! slug = "analytics"
//!
//! [[posts]]
//! id = "1"
//! title = "Building a Forecast"
//! slug = "building-a-forecast"
//! excerpt = "..."
//! content = "<p>...</p>"
//! cover_image = "/images/blog/forecasting.jpg"
//! published_at = "2024-07-08T08:00:00Z"
//! author = "maya-okafor"      # author id
//! category = "analytics"     # category id
//! tags = ["Forecasting"]
//! ```

use std::{collections::HashSet, path::Path, str::FromStr};

use serde::Deserialize;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::{
    author::Author,
    category::Category,
    post::BlogPost,
    seed::SeedContent,
    slug::Slug,
};

#[derive(Debug, thiserror::Error)]
pub enum FailToLoadSeed {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("More than one post uses the slug `{0}`")]
    DuplicateSlug(String),
    #[error("Post `{post}` names unknown author `{author}`")]
    UnknownAuthor { post: String, author: String },
}

/// Slug of the stand-in category for a post whose category id is blank.
const UNLISTED_CATEGORY_SLUG: &str = "uncategorized";

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    authors: Vec<Author>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    posts: Vec<PostRecord>,
}

#[derive(Debug, Deserialize)]
struct PostRecord {
    id: String,
    title: String,
    slug: Slug,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    cover_image: String,
    #[serde(with = "time::serde::rfc3339")]
    published_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    updated_at: Option<OffsetDateTime>,
    author: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    featured: bool,
}

impl SeedContent {
    /// Read seed content from a TOML file
    ///
    /// # Errors
    /// Returns `FailToLoadSeed::Io` if the file cannot be read, and the other variants as
    /// described in [`SeedContent::from_toml`].
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, FailToLoadSeed> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        debug!(path = %path.display(), "loading seed content");
        Self::from_toml(&content)
    }

    /// Parse seed content and resolve the author and category of every post
    ///
    /// # Errors
    /// Returns `FailToLoadSeed::TomlParse` for malformed TOML,
    /// `FailToLoadSeed::DuplicateSlug` when two posts share a slug and
    /// `FailToLoadSeed::UnknownAuthor` when a post names an author id that is not listed.
    ///
    /// A post naming an unlisted (or blank) category id is accepted. It is filed under a
    /// stand-in category carrying that id, which no category listing will count.
    pub fn from_toml(content: &str) -> Result<Self, FailToLoadSeed> {
        let file: SeedFile = toml::from_str(content)?;

        let mut seen = HashSet::new();
        let mut posts = Vec::with_capacity(file.posts.len());
        for record in file.posts {
            if !seen.insert(record.slug.clone()) {
                return Err(FailToLoadSeed::DuplicateSlug(record.slug.into_string()));
            }

            let author = file
                .authors
                .iter()
                .find(|author| author.id() == record.author)
                .cloned()
                .ok_or_else(|| FailToLoadSeed::UnknownAuthor {
                    post: record.slug.to_string(),
                    author: record.author.clone(),
                })?;

            let category = match file
                .categories
                .iter()
                .find(|category| category.id() == record.category)
            {
                Some(category) => category.clone(),
                None => {
                    warn!(post = %record.slug, category = %record.category, "unknown category id");
                    let slug = Slug::from_str(&record.category)
                        .unwrap_or_else(|_| Slug::literal(UNLISTED_CATEGORY_SLUG));
                    Category::new(record.category.clone(), record.category.clone(), slug)
                }
            };

            let mut builder = BlogPost::builder(
                record.id,
                record.title,
                record.slug,
                record.published_at,
                author,
                category,
            )
            .excerpt(record.excerpt)
            .content(record.content)
            .cover_image(record.cover_image)
            .tags(record.tags)
            .featured(record.featured);
            if let Some(updated_at) = record.updated_at {
                builder = builder.updated_at(updated_at);
            }
            posts.push(builder.build());
        }

        Ok(Self::new(file.authors, file.categories, posts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"
[[authors]]
id = "maya"
name = "Maya Okafor"
slug = "maya-okafor"
avatar = "/images/team/maya.jpg"
bio = "Founder"

[authors.social]
linkedin = "https://www.linkedin.com/in/mayaokafor"

[[categories]]
id = "analytics"
name = "Analytics"
slug = "analytics"
description = "Numbers"

[[posts]]
id = "1"
title = "Forecasting"
slug = "forecasting"
content = "<p>Forecasts are promises.</p>"
published_at = "2024-07-08T08:00:00Z"
updated_at = "2024-07-09T08:00:00Z"
author = "maya"
category = "analytics"
tags = ["Forecasting", "Pipeline"]
featured = true

[[posts]]
id = "2"
title = "Archived"
slug = "archived"
published_at = "2023-01-01T00:00:00Z"
author = "maya"
category = "old-news"
"#;

    #[test]
    fn parses_and_resolves_references() {
        let seed = SeedContent::from_toml(SEED).unwrap();
        assert_eq!(seed.authors.len(), 1);
        assert_eq!(seed.categories.len(), 1);
        assert_eq!(seed.posts.len(), 2);

        let post = &seed.posts[0];
        assert_eq!(post.author().name(), "Maya Okafor");
        assert_eq!(post.category().description(), Some("Numbers"));
        assert_eq!(post.tags(), ["Forecasting", "Pipeline"]);
        assert!(post.is_featured());
        assert!(post.updated_at() > post.published_at());
        assert!(seed.authors[0].social().unwrap().linkedin.is_some());
    }

    #[test]
    fn unknown_category_becomes_stand_in() {
        let seed = SeedContent::from_toml(SEED).unwrap();
        let post = &seed.posts[1];
        assert_eq!(post.category().id(), "old-news");
        assert_eq!(post.updated_at(), post.published_at());
    }

    #[test]
    fn blank_category_id_is_not_an_error() {
        let content = SEED.replace("category = \"old-news\"", "category = \"  \"");
        let seed = SeedContent::from_toml(&content).unwrap();
        let post = &seed.posts[1];
        assert_eq!(post.category().id(), "  ");
        assert_eq!(post.category().slug(), UNLISTED_CATEGORY_SLUG);
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let content = format!(
            "{SEED}\n[[posts]]\nid = \"3\"\ntitle = \"Again\"\nslug = \"forecasting\"\n\
             published_at = \"2024-01-01T00:00:00Z\"\nauthor = \"maya\"\ncategory = \"analytics\"\n"
        );
        let err = SeedContent::from_toml(&content).unwrap_err();
        assert!(matches!(err, FailToLoadSeed::DuplicateSlug(slug) if slug == "forecasting"));
    }

    #[test]
    fn rejects_unknown_author() {
        let content = SEED.replace(
            "author = \"maya\"\ncategory = \"old-news\"",
            "author = \"ghost\"\ncategory = \"old-news\"",
        );
        let err = SeedContent::from_toml(&content).unwrap_err();
        assert!(matches!(err, FailToLoadSeed::UnknownAuthor { author, .. } if author == "ghost"));
    }

    #[tokio::test]
    async fn opens_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        tokio::fs::write(&path, SEED).await.unwrap();

        let seed = SeedContent::open(&path).await.unwrap();
        assert_eq!(seed.posts.len(), 2);

        let missing = SeedContent::open(dir.path().join("missing.toml")).await;
        assert!(matches!(missing, Err(FailToLoadSeed::Io(_))));
    }
}
