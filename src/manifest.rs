//! Site configuration.
//!
//! Lives in `Site.toml` at the root of the site:
//! ```toml
//! title = "Northbeam RevOps"
//!
//! [content]
//! seed = "content.toml"
//! words_per_minute = 200
//! related_limit = 3
//! ```

use std::{
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{reading::DEFAULT_WORDS_PER_MINUTE, related::DEFAULT_RELATED_LIMIT};

/// File name of the site manifest
pub const MANIFEST_FILE: &str = "Site.toml";

/// Configuration for the whole site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteManifest {
    title: String,
    #[serde(default)]
    content: ContentSettings,
}

/// How content is sourced and presented
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentSettings {
    /// TOML seed file, relative to the manifest. The compiled-in content is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<PathBuf>,
    #[serde(default = "default_words_per_minute")]
    words_per_minute: NonZeroU32,
    #[serde(default = "default_related_limit")]
    related_limit: usize,
}

const fn default_words_per_minute() -> NonZeroU32 {
    DEFAULT_WORDS_PER_MINUTE
}

const fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            seed: None,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

impl Default for SiteManifest {
    fn default() -> Self {
        Self {
            title: "Company Site".to_string(),
            content: ContentSettings::default(),
        }
    }
}

impl SiteManifest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: ContentSettings::default(),
        }
    }

    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub const fn content(&self) -> &ContentSettings {
        &self.content
    }

    pub fn set_seed(&mut self, seed: impl Into<PathBuf>) {
        self.content.seed = Some(seed.into());
    }
}

impl ContentSettings {
    #[must_use]
    pub fn seed(&self) -> Option<&Path> {
        self.seed.as_deref()
    }

    #[must_use]
    pub const fn words_per_minute(&self) -> NonZeroU32 {
        self.words_per_minute
    }

    #[must_use]
    pub const fn related_limit(&self) -> usize {
        self.related_limit
    }
}

/// Errors that can occur when opening the manifest
#[derive(Debug, thiserror::Error)]
pub enum FailToOpenManifest {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// TOML file operations for configuration types
pub trait ManifestExt: Serialize + DeserializeOwned {
    /// Read and parse the file at `path`
    ///
    /// # Errors
    /// Returns `FailToOpenManifest` if the file cannot be read or parsed
    fn open(
        path: impl AsRef<Path>,
    ) -> impl Future<Output = Result<Self, FailToOpenManifest>> + Send {
        let path = path.as_ref().to_path_buf();
        async move {
            let content = tokio::fs::read_to_string(&path).await?;
            let manifest = toml::from_str(&content)?;
            Ok(manifest)
        }
    }

    /// Export to a TOML string
    ///
    /// # Errors
    /// Returns the serializer error if the value has no TOML representation
    fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Save to a file at the given path
    ///
    /// # Errors
    /// Returns an `std::io::Error` if the file cannot be written
    fn save_to_file(
        &self,
        path: impl AsRef<Path>,
    ) -> impl Future<Output = Result<(), std::io::Error>> + Send {
        let path = path.as_ref().to_path_buf();
        let content = self.to_toml().map_err(std::io::Error::other);
        async move { tokio::fs::write(path, content?).await }
    }
}

impl ManifestExt for SiteManifest {}
