//! Read-only queries over the site's content.
//!
//! [`ContentQuery`] is the contract page handlers program against. [`StaticContent`]
//! implements it over a fixed snapshot of seed content; a database-backed source only has
//! to provide [`ContentQuery::all_posts`] and [`ContentQuery::all_categories`] to get the
//! rest.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::{
    author::Author,
    category::Category,
    post::BlogPost,
    related,
    seed::SeedContent,
    tag::{self, Tag},
};

/// Queries a page can make against the content source.
///
/// None of these fail: a lookup that finds nothing returns `None` or an empty list, and the
/// caller decides whether that means a not-found page.
pub trait ContentQuery {
    /// Every post, newest first by publish time.
    fn all_posts(&self) -> Vec<BlogPost>;

    /// Every category with the number of posts filed under it.
    fn all_categories(&self) -> Vec<Category>;

    /// The post with this slug, if any.
    fn post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.all_posts()
            .into_iter()
            .find(|post| post.slug() == slug)
    }

    /// Every distinct tag slug with the number of posts carrying it.
    fn all_tags(&self) -> Vec<Tag> {
        tag::collect_tags(&self.all_posts())
    }

    /// Posts filed under the listed category with this slug, newest first.
    ///
    /// Posts are matched on category id, so a post filed under an unlisted category never
    /// shows up here, even when its stand-in category happens to share the slug.
    fn posts_by_category(&self, slug: &str) -> Vec<BlogPost> {
        let Some(category) = self
            .all_categories()
            .into_iter()
            .find(|category| category.slug() == slug)
        else {
            return Vec::new();
        };
        self.all_posts()
            .into_iter()
            .filter(|post| post.category().id() == category.id())
            .collect()
    }

    /// Posts carrying a tag whose slug is `slug`, newest first.
    fn posts_by_tag(&self, slug: &str) -> Vec<BlogPost> {
        self.all_posts()
            .into_iter()
            .filter(|post| tag::has_tag(post, slug))
            .collect()
    }

    /// Up to `limit` other posts ranked by relevance to the post with this slug.
    ///
    /// See [`related::related_posts`] for the ranking rules. Ties are broken by recency.
    fn related_posts(&self, slug: &str, limit: usize) -> Vec<BlogPost> {
        let posts = self.all_posts();
        related::related_posts(&posts, slug, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Posts flagged as featured, newest first.
    fn featured_posts(&self) -> Vec<BlogPost> {
        self.all_posts()
            .into_iter()
            .filter(BlogPost::is_featured)
            .collect()
    }

    /// The `limit` newest posts.
    fn recent_posts(&self, limit: usize) -> Vec<BlogPost> {
        let mut posts = self.all_posts();
        posts.truncate(limit);
        posts
    }

    /// Posts written by the author with this slug, newest first.
    fn posts_by_author(&self, slug: &str) -> Vec<BlogPost> {
        self.all_posts()
            .into_iter()
            .filter(|post| post.author().slug() == slug)
            .collect()
    }

    /// Authors of at least one post, in the order they first appear in [`Self::all_posts`].
    fn all_authors(&self) -> Vec<Author> {
        let mut authors: Vec<Author> = Vec::new();
        for post in self.all_posts() {
            if !authors.iter().any(|author| author.id() == post.author().id()) {
                authors.push(post.author().clone());
            }
        }
        authors
    }

    /// Posts whose title, excerpt or any tag contains `query`, ignoring case.
    ///
    /// A blank query matches nothing.
    fn search(&self, query: &str) -> Vec<BlogPost> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.all_posts()
            .into_iter()
            .filter(|post| matches_query(post, &needle))
            .collect()
    }
}

fn matches_query(post: &BlogPost, needle: &str) -> bool {
    post.title().to_lowercase().contains(needle)
        || post.excerpt().to_lowercase().contains(needle)
        || post
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Content held in memory for the lifetime of the process.
///
/// Posts are ordered and categories counted once, when the store is built. The tag index is
/// built on first use and kept. The seed records themselves are never modified.
#[derive(Debug)]
pub struct StaticContent {
    posts: Vec<BlogPost>,
    categories: Vec<Category>,
    tags: OnceLock<Vec<Tag>>,
}

impl StaticContent {
    /// Build the store and its derived views from seed content
    #[must_use]
    pub fn new(seed: SeedContent) -> Self {
        let SeedContent {
            categories,
            mut posts,
            ..
        } = seed;
        posts.sort_by(|a, b| b.published_at().cmp(&a.published_at()));

        for post in &posts {
            let known = categories
                .iter()
                .any(|category| category.id() == post.category().id());
            if !known {
                warn!(
                    post = %post.slug(),
                    category = post.category().id(),
                    "post is filed under a category that is not listed"
                );
            }
        }

        let categories: Vec<Category> = categories
            .iter()
            .map(|category| {
                let count = posts
                    .iter()
                    .filter(|post| post.category().id() == category.id())
                    .count();
                category.counted(count)
            })
            .collect();

        debug!(
            posts = posts.len(),
            categories = categories.len(),
            "built content store"
        );

        Self {
            posts,
            categories,
            tags: OnceLock::new(),
        }
    }

    /// The store over the compiled-in site content
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(SeedContent::builtin())
    }

    /// Posts, newest first, without cloning
    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Categories with counts, without cloning
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Tag index, built on first call
    pub fn tags(&self) -> &[Tag] {
        self.tags.get_or_init(|| tag::collect_tags(&self.posts))
    }

    /// Borrowing lookup by slug
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug() == slug)
    }
}

impl Default for StaticContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentQuery for StaticContent {
    fn all_posts(&self) -> Vec<BlogPost> {
        self.posts.clone()
    }

    fn all_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.get(slug).cloned()
    }

    fn all_tags(&self) -> Vec<Tag> {
        self.tags().to_vec()
    }

    fn related_posts(&self, slug: &str, limit: usize) -> Vec<BlogPost> {
        related::related_posts(&self.posts, slug, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    fn recent_posts(&self, limit: usize) -> Vec<BlogPost> {
        self.posts.iter().take(limit).cloned().collect()
    }
}
