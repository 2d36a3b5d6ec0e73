use serde::Serialize;
use time::OffsetDateTime;

use crate::{author::Author, category::Category, reading::calculate_reading_time, slug::Slug};

/// A blog post with its full HTML body
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlogPost {
    content: String, // html
    #[serde(flatten)]
    preview: PostPreview,
}

/// A blog post without its body, as shown on listing pages
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostPreview {
    id: String,
    title: String,
    slug: Slug,
    excerpt: String,
    cover_image: String,
    #[serde(with = "time::serde::rfc3339")]
    published_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
    author: Author,
    category: Category,
    tags: Vec<String>,
    featured: bool,
    reading_time: u32, // minutes
}

/// Builder for [`BlogPost`], since a post has too many fields for a plain constructor.
#[derive(Debug, Clone)]
pub struct PostBuilder {
    id: String,
    title: String,
    slug: Slug,
    excerpt: String,
    content: String,
    cover_image: String,
    published_at: OffsetDateTime,
    updated_at: Option<OffsetDateTime>,
    author: Author,
    category: Category,
    tags: Vec<String>,
    featured: bool,
}

impl PostBuilder {
    #[must_use]
    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = cover_image.into();
        self
    }

    /// Last update time, defaults to the publish time
    #[must_use]
    pub fn updated_at(mut self, updated_at: OffsetDateTime) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    #[must_use]
    pub fn tags<T: Into<String>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    #[must_use]
    pub fn build(self) -> BlogPost {
        let reading_time = calculate_reading_time(&self.content);
        BlogPost {
            content: self.content,
            preview: PostPreview {
                id: self.id,
                title: self.title,
                slug: self.slug,
                excerpt: self.excerpt,
                cover_image: self.cover_image,
                published_at: self.published_at,
                updated_at: self.updated_at.unwrap_or(self.published_at),
                author: self.author,
                category: self.category,
                tags: self.tags,
                featured: self.featured,
                reading_time,
            },
        }
    }
}

impl BlogPost {
    /// Start building a post with the fields every post must have
    pub fn builder(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: Slug,
        published_at: OffsetDateTime,
        author: Author,
        category: Category,
    ) -> PostBuilder {
        PostBuilder {
            id: id.into(),
            title: title.into(),
            slug,
            excerpt: String::new(),
            content: String::new(),
            cover_image: String::new(),
            published_at,
            updated_at: None,
            author,
            category,
            tags: Vec::new(),
            featured: false,
        }
    }

    /// Get a reference to the post preview
    #[must_use]
    pub const fn preview(&self) -> &PostPreview {
        &self.preview
    }

    /// Consume the post and return its preview
    #[must_use]
    pub fn into_preview(self) -> PostPreview {
        self.preview
    }

    #[must_use]
    pub const fn content(&self) -> &str {
        self.content.as_str()
    }

    #[must_use]
    pub const fn id(&self) -> &str {
        self.preview.id.as_str()
    }

    #[must_use]
    pub const fn title(&self) -> &str {
        self.preview.title.as_str()
    }

    #[must_use]
    pub const fn slug(&self) -> &Slug {
        &self.preview.slug
    }

    #[must_use]
    pub const fn excerpt(&self) -> &str {
        self.preview.excerpt.as_str()
    }

    #[must_use]
    pub const fn cover_image(&self) -> &str {
        self.preview.cover_image.as_str()
    }

    #[must_use]
    pub const fn published_at(&self) -> OffsetDateTime {
        self.preview.published_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> OffsetDateTime {
        self.preview.updated_at
    }

    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.preview.author
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.preview.category
    }

    /// Tags in the order they were written, exactly as spelled
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.preview.tags
    }

    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.preview.featured
    }

    /// Estimated minutes to read the body
    #[must_use]
    pub const fn reading_time(&self) -> u32 {
        self.preview.reading_time
    }
}

impl PostPreview {
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub const fn slug(&self) -> &Slug {
        &self.slug
    }

    #[must_use]
    pub const fn excerpt(&self) -> &str {
        self.excerpt.as_str()
    }

    #[must_use]
    pub const fn published_at(&self) -> OffsetDateTime {
        self.published_at
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Estimated minutes to read the body, at 200 words per minute
    #[must_use]
    pub const fn reading_time(&self) -> u32 {
        self.reading_time
    }
}
