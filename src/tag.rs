//! Tags derived from the free-form tag strings on posts.
//!
//! A tag is identified by its slug ([`tag_slug`]); spellings that normalize to the same slug
//! are one tag. Blank tags normalize to an empty slug and are ignored everywhere.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::{post::BlogPost, slug::tag_slug};

/// A tag derived from the raw tag strings of posts.
///
/// Tags are not stored anywhere. `name` is rebuilt from the slug, so the casing and
/// punctuation of the original spelling do not survive.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Normalized tag, used in `/blog/tag/{slug}` URLs
    pub slug: String,
    /// Display name rebuilt from the slug
    pub name: String,
    /// Number of posts carrying the tag
    pub count: usize,
}

/// Title-case each hyphen-separated word of a tag slug: `sales-operations` → `Sales Operations`.
#[must_use]
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut graphemes = word.graphemes(true);
            graphemes.next().map_or_else(String::new, |first| {
                let mut name = first.to_uppercase();
                name.push_str(graphemes.as_str());
                name
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether any of the post's tags normalizes to `slug`. An empty slug matches nothing.
#[must_use]
pub fn has_tag(post: &BlogPost, slug: &str) -> bool {
    !slug.is_empty() && post.tags().iter().any(|tag| tag_slug(tag) == slug)
}

/// Count, for every distinct tag slug, the posts carrying a tag with that slug.
///
/// A post spelling the same tag twice (`RevOps`, `revops`) is counted once. The result is
/// ordered by slug.
#[must_use]
pub fn collect_tags(posts: &[BlogPost]) -> Vec<Tag> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for post in posts {
        let slugs: BTreeSet<String> = post
            .tags()
            .iter()
            .map(|tag| tag_slug(tag))
            .filter(|slug| !slug.is_empty())
            .collect();
        for slug in slugs {
            *counts.entry(slug).or_default() += 1;
        }
    }
    debug!(tags = counts.len(), "built tag index");

    counts
        .into_iter()
        .map(|(slug, count)| Tag {
            name: display_name(&slug),
            slug,
            count,
        })
        .collect()
}
