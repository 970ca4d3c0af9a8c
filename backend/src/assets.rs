use std::fs;
use std::path::PathBuf;
use include_dir::{include_dir, Dir};
use tracing::{debug, warn};
use uuid::Uuid;
use crate::error::AssetError;

/// Trunk output, embedded at compile time.
pub static BUNDLE: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

pub const INDEX_FILE: &str = "index.html";

/// Writes the embedded bundle into a fresh per-process temp directory and returns its path.
pub fn extract_bundle() -> Result<PathBuf, AssetError> {
    let root = std::env::temp_dir().join(format!("samosatech_static_{}", Uuid::new_v4()));
    fs::create_dir_all(&root).map_err(|source| AssetError::CreateDir { path: root.clone(), source })?;
    BUNDLE
        .extract(&root)
        .map_err(|source| AssetError::Extract { path: root.clone(), source })?;

    if root.join(INDEX_FILE).is_file() {
        debug!("Bundle extracted with {} entries", BUNDLE.entries().len());
    } else {
        warn!("Bundle has no {}; build the frontend with trunk before deploying", INDEX_FILE);
    }
    Ok(root)
}
