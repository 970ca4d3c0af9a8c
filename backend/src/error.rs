use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to create static directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to extract static files into {path}: {source}")]
    Extract { path: PathBuf, source: io::Error },
}
