//! Content index for the company site.
//!
//! Posts, authors and categories are loaded once into a [`StaticContent`] store, and pages
//! read them through the [`ContentQuery`] trait: listings, lookups by slug, category and tag
//! views, related posts and reading-time estimates.

pub mod author;
pub mod category;
pub mod error;
pub mod manifest;
pub mod post;
pub mod reading;
pub mod related;
pub mod seed;
pub mod site;
pub mod slug;
pub mod store;
pub mod tag;

pub use error::{Error, Result};
pub use reading::calculate_reading_time;
pub use site::Site;
pub use store::{ContentQuery, StaticContent};
