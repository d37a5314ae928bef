use thiserror::Error;

/// Failures on the store's write path.
///
/// The read path has no error variant of its own: a missing or corrupt
/// archive deliberately loads as the empty mapping.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
