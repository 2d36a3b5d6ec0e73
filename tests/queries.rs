use site_content::{
    ContentQuery, StaticContent,
    author::Author,
    calculate_reading_time,
    category::Category,
    post::BlogPost,
    seed::SeedContent,
    slug::{Slug, tag_slug},
};
use std::collections::BTreeMap;
use time::{OffsetDateTime, macros::datetime};

/// A source that only answers the two required queries, like a database-backed one would.
/// Everything else comes from the trait's provided methods.
struct Snapshot {
    posts: Vec<BlogPost>,
    categories: Vec<Category>,
}

impl From<&StaticContent> for Snapshot {
    fn from(store: &StaticContent) -> Self {
        Self {
            posts: store.posts().to_vec(),
            categories: store.categories().to_vec(),
        }
    }
}

impl ContentQuery for Snapshot {
    fn all_posts(&self) -> Vec<BlogPost> {
        self.posts.clone()
    }

    fn all_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }
}

fn sources(store: StaticContent) -> Vec<(&'static str, Box<dyn ContentQuery>)> {
    let snapshot = Snapshot::from(&store);
    vec![("static", Box::new(store)), ("snapshot", Box::new(snapshot))]
}

fn slug(value: &str) -> Slug {
    value.parse().unwrap()
}

fn post(
    slug_value: &str,
    category: &Category,
    tags: &[&str],
    published_at: OffsetDateTime,
) -> BlogPost {
    let author = Author::new("a", "Alex Kim", slug("alex-kim"), "/a.jpg", "Consultant");
    BlogPost::builder(
        slug_value,
        slug_value.to_uppercase(),
        slug(slug_value),
        published_at,
        author,
        category.clone(),
    )
    .tags(tags.iter().copied())
    .build()
}

fn abc() -> StaticContent {
    let revops = Category::new("revops", "RevOps", slug("revops"));
    let analytics = Category::new("analytics", "Analytics", slug("analytics"));
    let posts = vec![
        post("a", &revops, &["Strategy", "Growth"], datetime!(2024-03-01 0:00 UTC)),
        post("c", &analytics, &["Growth"], datetime!(2024-02-01 0:00 UTC)),
        post("b", &revops, &["Salesforce"], datetime!(2024-01-01 0:00 UTC)),
    ];
    StaticContent::new(SeedContent::new(Vec::new(), vec![revops, analytics], posts))
}

fn slugs(posts: &[BlogPost]) -> Vec<&str> {
    posts.iter().map(|post| post.slug().as_str()).collect()
}

#[test]
fn related_ranks_category_above_tag() {
    for (name, source) in sources(abc()) {
        let related = source.related_posts("a", 2);
        assert_eq!(slugs(&related), ["b", "c"], "{name}");
    }
}

#[test]
fn posts_are_newest_first() {
    for (name, source) in sources(StaticContent::builtin()) {
        let posts = source.all_posts();
        assert!(!posts.is_empty(), "{name}");
        assert!(
            posts
                .windows(2)
                .all(|pair| pair[0].published_at() >= pair[1].published_at()),
            "{name}"
        );
    }
}

#[test]
fn slugs_are_unique_and_found() {
    for (name, source) in sources(StaticContent::builtin()) {
        let posts = source.all_posts();
        for post in &posts {
            let found = source.post_by_slug(post.slug().as_str()).unwrap();
            assert_eq!(found.slug(), post.slug(), "{name}");
            assert_eq!(
                posts.iter().filter(|other| other.slug() == post.slug()).count(),
                1,
                "{name}"
            );
        }
        assert!(source.post_by_slug("does-not-exist").is_none(), "{name}");
    }
}

#[test]
fn category_counts_match_listings() {
    for (name, source) in sources(StaticContent::builtin()) {
        let categories = source.all_categories();
        assert_eq!(categories.len(), 4, "{name}");
        for category in &categories {
            assert_eq!(
                category.count(),
                source.posts_by_category(category.slug().as_str()).len(),
                "{name}"
            );
        }
        let crm = categories
            .iter()
            .find(|category| category.slug() == "crm-systems")
            .unwrap();
        assert_eq!(crm.count(), 2, "{name}");
    }
}

#[test]
fn tags_have_one_entry_per_slug() {
    for (name, source) in sources(StaticContent::builtin()) {
        let posts = source.all_posts();

        let mut expected: BTreeMap<String, usize> = BTreeMap::new();
        for post in &posts {
            let mut seen: Vec<String> = post.tags().iter().map(|tag| tag_slug(tag)).collect();
            seen.sort();
            seen.dedup();
            for slug in seen {
                *expected.entry(slug).or_default() += 1;
            }
        }

        let tags = source.all_tags();
        assert_eq!(tags.len(), expected.len(), "{name}");
        for tag in &tags {
            assert_eq!(expected.get(&tag.slug), Some(&tag.count), "{name}");
            assert_eq!(source.posts_by_tag(&tag.slug).len(), tag.count, "{name}");
        }

        let sales_process = tags.iter().find(|tag| tag.slug == "sales-process").unwrap();
        assert_eq!(sales_process.name, "Sales Process", "{name}");
    }
}

#[test]
fn related_never_includes_self_and_respects_limit() {
    for (name, source) in sources(StaticContent::builtin()) {
        let total = source.all_posts().len();
        for post in source.all_posts() {
            for limit in [0, 1, 3, total + 5] {
                let related = source.related_posts(post.slug().as_str(), limit);
                assert!(
                    related.iter().all(|other| other.slug() != post.slug()),
                    "{name}"
                );
                assert_eq!(related.len(), limit.min(total - 1), "{name}");
            }
        }
    }
}

#[test]
fn related_breaks_ties_by_recency() {
    for (name, source) in sources(StaticContent::builtin()) {
        let related = source.related_posts("cleaning-up-salesforce-org", 3);
        assert_eq!(
            slugs(&related),
            [
                "hubspot-to-salesforce-migration-checklist",
                "what-revops-means-for-series-a",
                "building-a-forecast-your-board-will-believe",
            ],
            "{name}"
        );
    }
}

#[test]
fn recent_posts_truncates() {
    for (name, source) in sources(StaticContent::builtin()) {
        let total = source.all_posts().len();
        assert_eq!(source.recent_posts(2).len(), 2, "{name}");
        assert_eq!(source.recent_posts(total + 3).len(), total, "{name}");
        assert_eq!(
            slugs(&source.recent_posts(1)),
            ["what-revops-means-for-series-a"],
            "{name}"
        );
    }
}

#[test]
fn featured_and_authors() {
    for (name, source) in sources(StaticContent::builtin()) {
        assert_eq!(source.featured_posts().len(), 2, "{name}");
        assert_eq!(source.all_authors().len(), 2, "{name}");
        assert_eq!(source.posts_by_author("maya-okafor").len(), 3, "{name}");
        assert!(!source.search("salesforce").is_empty(), "{name}");
    }
}

#[test]
fn reading_time_floors_and_rounds_up() {
    assert_eq!(calculate_reading_time(""), 1);
    let four_hundred = vec!["pipeline"; 400].join(" ");
    assert_eq!(calculate_reading_time(&four_hundred), 2);
}
