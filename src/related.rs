//! Related-post ranking.
//!
//! A candidate earns [`CATEGORY_WEIGHT`] for sharing the post's category and
//! [`TAG_WEIGHT`] for every tag string it shares with the post. Tags are compared exactly as
//! written, so `revops` and `RevOps` do not match here even though they share a tag slug.

use tracing::trace;

use crate::post::BlogPost;

/// Score for being filed under the same category id.
pub const CATEGORY_WEIGHT: u32 = 3;
/// Score per shared tag string.
pub const TAG_WEIGHT: u32 = 1;
/// Number of related posts shown when the caller has no preference.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Relevance of `candidate` to `post`. Only used for ranking.
#[must_use]
pub fn relevance(post: &BlogPost, candidate: &BlogPost) -> u32 {
    let mut score = 0;
    if post.category().id() == candidate.category().id() {
        score += CATEGORY_WEIGHT;
    }
    for tag in candidate.tags() {
        if post.tags().contains(tag) {
            score += TAG_WEIGHT;
        }
    }
    score
}

/// Up to `limit` posts ranked by relevance to the post identified by `slug`.
///
/// The post itself is never returned. Ties keep the order of `posts`, and zero-score posts
/// still fill the result when fewer than `limit` posts are relevant. An unknown slug yields
/// an empty list.
#[must_use]
pub fn related_posts<'a>(posts: &'a [BlogPost], slug: &str, limit: usize) -> Vec<&'a BlogPost> {
    let Some(post) = posts.iter().find(|post| post.slug() == slug) else {
        return Vec::new();
    };

    let mut scored: Vec<(u32, &BlogPost)> = posts
        .iter()
        .filter(|candidate| candidate.slug() != post.slug())
        .map(|candidate| (relevance(post, candidate), candidate))
        .collect();
    // stable: equal scores keep seed order
    scored.sort_by(|(a, _), (b, _)| b.cmp(a));

    trace!(slug, candidates = scored.len(), "ranked related posts");
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{author::Author, category::Category};
    use time::macros::datetime;

    fn post(slug: &str, category: &str, tags: &[&str]) -> BlogPost {
        let author = Author::new("a1", "Jordan Reyes", "jordan-reyes".parse().unwrap(), "", "");
        let category = Category::new(category, category, category.to_lowercase().parse().unwrap());
        BlogPost::builder(
            slug,
            slug,
            slug.parse().unwrap(),
            datetime!(2024-01-01 0:00 UTC),
            author,
            category,
        )
        .tags(tags.iter().copied())
        .build()
    }

    #[test]
    fn scores_category_and_tags() {
        let a = post("a", "RevOps", &["Strategy", "Growth"]);
        let b = post("b", "RevOps", &["Growth", "Strategy"]);
        let c = post("c", "Analytics", &["Growth"]);
        assert_eq!(relevance(&a, &b), 5);
        assert_eq!(relevance(&a, &c), 1);
    }

    #[test]
    fn tag_comparison_is_exact() {
        let a = post("a", "RevOps", &["revops"]);
        let b = post("b", "Analytics", &["RevOps", " revops"]);
        assert_eq!(relevance(&a, &b), 0);
    }

    #[test]
    fn pads_with_unrelated_posts() {
        let posts = vec![
            post("a", "RevOps", &["Strategy"]),
            post("b", "Analytics", &["Data"]),
            post("c", "Sales", &["Pipeline"]),
        ];
        let related = related_posts(&posts, "a", 3);
        let slugs: Vec<_> = related.iter().map(|post| post.slug().as_str()).collect();
        assert_eq!(slugs, ["b", "c"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let posts = vec![
            post("a", "RevOps", &[]),
            post("b", "RevOps", &[]),
            post("c", "Sales", &[]),
            post("d", "RevOps", &[]),
        ];
        let related = related_posts(&posts, "a", 2);
        let slugs: Vec<_> = related.iter().map(|post| post.slug().as_str()).collect();
        assert_eq!(slugs, ["b", "d"]);
    }

    #[test]
    fn unknown_slug_is_empty() {
        let posts = vec![post("a", "RevOps", &[])];
        assert!(related_posts(&posts, "missing", 3).is_empty());
        assert!(related_posts(&posts, "a", 0).is_empty());
    }
}
