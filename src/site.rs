use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    error::Result,
    manifest::{FailToOpenManifest, MANIFEST_FILE, ManifestExt, SiteManifest},
    post::BlogPost,
    reading::reading_time_with,
    seed::SeedContent,
    store::{ContentQuery, StaticContent},
};

/// A site: its manifest and the content it serves.
#[derive(Debug)]
pub struct Site {
    root: PathBuf,
    manifest: SiteManifest,
    content: StaticContent,
}

impl Site {
    /// Open the site rooted at `root`
    ///
    /// Without a `Site.toml` the default manifest and the compiled-in content are used.
    ///
    /// # Errors
    /// Returns `Error::Manifest` if `Site.toml` exists but cannot be read or parsed, or if
    /// its existence cannot be checked (for example when `root` is a file), and
    /// `Error::Seed` if the configured seed file fails to load.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join(MANIFEST_FILE);
        let exists = tokio::fs::try_exists(&manifest_path)
            .await
            .map_err(FailToOpenManifest::Io)?;
        let manifest = if exists {
            SiteManifest::open(&manifest_path).await?
        } else {
            debug!(path = %manifest_path.display(), "no manifest, using defaults");
            SiteManifest::default()
        };
        Self::with_manifest(root, manifest).await
    }

    /// Open the site with an already-loaded manifest
    ///
    /// # Errors
    /// Returns `Error::Seed` if the configured seed file fails to load.
    pub async fn with_manifest(root: impl AsRef<Path>, manifest: SiteManifest) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let seed = match manifest.content().seed() {
            Some(seed) => {
                let path = root.join(seed);
                info!(path = %path.display(), "loading content");
                SeedContent::open(path).await?
            }
            None => SeedContent::builtin(),
        };

        Ok(Self {
            root,
            manifest,
            content: StaticContent::new(seed),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn manifest(&self) -> &SiteManifest {
        &self.manifest
    }

    #[must_use]
    pub const fn content(&self) -> &StaticContent {
        &self.content
    }

    /// Related posts using the configured limit
    #[must_use]
    pub fn related_posts(&self, slug: &str) -> Vec<BlogPost> {
        self.content
            .related_posts(slug, self.manifest.content().related_limit())
    }

    /// Reading time of a post using the configured reading speed
    #[must_use]
    pub fn reading_time(&self, post: &BlogPost) -> u32 {
        reading_time_with(post.content(), self.manifest.content().words_per_minute())
    }
}
