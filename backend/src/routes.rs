use std::path::PathBuf;
use rocket::{State, fs::NamedFile, get};
use tracing::debug;
use crate::assets::INDEX_FILE;

/// Directory the bundle is served from.
pub struct StaticRoot(pub PathBuf);

/// Serves bundle files; any other path gets `index.html` so client-side routes survive a reload.
#[get("/<path..>")]
pub async fn spa_handler(path: PathBuf, root: &State<StaticRoot>) -> Option<NamedFile> {
    let file_path = root.0.join(&path);
    if file_path.is_file() {
        return NamedFile::open(&file_path).await.ok();
    }
    debug!("No file at /{}, serving {}", path.display(), INDEX_FILE);
    NamedFile::open(root.0.join(INDEX_FILE)).await.ok()
}
