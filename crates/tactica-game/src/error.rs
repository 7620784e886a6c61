use std::path::PathBuf;

use tactica_core::GridError;

/// Errors raised while loading maps and catalogs into a game.
///
/// "No path" and "out of range" are never errors; movement queries report
/// them through empty results.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map '{id}' declares unsupported dimensions {width}x{height}")]
    MapDimensions { id: String, width: u32, height: u32 },

    #[error("unknown map '{0}'")]
    UnknownMap(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
