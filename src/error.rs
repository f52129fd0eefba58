use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Manifest not found at {0}")]
    ManifestNotFound(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    ReadSource {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}
