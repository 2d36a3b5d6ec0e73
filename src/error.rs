use thiserror::Error;

use crate::{manifest::FailToOpenManifest, seed::FailToLoadSeed};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid manifest: {0}")]
    Manifest(#[from] FailToOpenManifest),
    #[error("Invalid seed content: {0}")]
    Seed(#[from] FailToLoadSeed),
}
