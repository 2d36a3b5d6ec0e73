use serde::{Deserialize, Serialize};

use crate::slug::Slug;

/// A person writing for the site.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Author {
    id: String,
    name: String,
    slug: Slug,
    avatar: String,
    bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    social: Option<SocialLinks>,
}

/// Optional profile links shown on author bios.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Author {
    /// Create an author without social links
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: Slug,
        avatar: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug,
            avatar: avatar.into(),
            bio: bio.into(),
            social: None,
        }
    }

    #[must_use]
    pub fn with_social(mut self, social: SocialLinks) -> Self {
        self.social = Some(social);
        self
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
    pub const fn avatar(&self) -> &str {
        self.avatar.as_str()
    }

    #[must_use]
    pub const fn bio(&self) -> &str {
        self.bio.as_str()
    }

    #[must_use]
    pub const fn social(&self) -> Option<&SocialLinks> {
        self.social.as_ref()
    }
}
