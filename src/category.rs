use serde::{Deserialize, Serialize};

use crate::slug::Slug;

/// A category posts are filed under.
///
/// `count` is derived: it is never read from seed content and is only non-zero on
/// categories returned by [`ContentQuery::all_categories`](crate::store::ContentQuery::all_categories).
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Category {
    id: String,
    name: String,
    slug: Slug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_deserializing, default)]
    count: usize,
}

impl Category {
    /// Create a new category with no posts counted yet
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: Slug) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug,
            description: None,
            count: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Copy of this category carrying the given post count.
    #[must_use]
    pub fn counted(&self, count: usize) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn id(&self) -> &str {
        self.id.as_str()
    }

    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub const fn slug(&self) -> &Slug {
        &self.slug
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_leaves_original_untouched() {
        let category = Category::new("1", "RevOps", "revops".parse().unwrap());
        let counted = category.counted(4);
        assert_eq!(category.count(), 0);
        assert_eq!(counted.count(), 4);
        assert_eq!(counted.slug(), category.slug());
    }

    #[test]
    fn count_is_not_read_from_input() {
        let category: Category =
            serde_json::from_str(r#"{"id":"1","name":"RevOps","slug":"revops","count":9}"#)
                .unwrap();
        assert_eq!(category.count(), 0);
    }
}
