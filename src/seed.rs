//! Seed content: the posts, authors and categories the site ships with.

mod builtin;
mod file;

pub use file::FailToLoadSeed;

use crate::{author::Author, category::Category, post::BlogPost};

/// A snapshot of everything the content store is built from.
#[derive(Debug, Clone, Default)]
pub struct SeedContent {
    pub authors: Vec<Author>,
    pub categories: Vec<Category>,
    pub posts: Vec<BlogPost>,
}

impl SeedContent {
    #[must_use]
    pub const fn new(authors: Vec<Author>, categories: Vec<Category>, posts: Vec<BlogPost>) -> Self {
        Self {
            authors,
            categories,
            posts,
        }
    }

    /// The content compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        builtin::content()
    }
}
