use std::path::PathBuf;

/// Errors raised while loading or validating frames and requests.
///
/// The frame preparation functions themselves never fail; bad cells and
/// unusable frames are dropped instead.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field `{field}` in frame `{frame}` has {actual} values, expected {expected}")]
    LengthMismatch {
        frame: String,
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("unknown theme `{0}` (expected `dark` or `light`)")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, FrameError>;
