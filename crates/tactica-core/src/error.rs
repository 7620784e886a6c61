//! Error types for grid construction and tile catalogs.

/// Errors raised while building a [`Grid`](crate::Grid) or a
/// [`TileCatalog`](crate::TileCatalog).
///
/// Query operations never fail; these only surface when the caller hands
/// over malformed map data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The tile matrix does not have `height` rows.
    #[error("invalid tile data: expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },

    /// A row of the tile matrix does not have `width` columns.
    #[error("invalid tile data: expected {expected} columns in row {row}, got {actual}")]
    ColumnCount {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Two catalog entries share the same id.
    #[error("duplicate tile id {0} in catalog")]
    DuplicateTileId(u16),

    /// The catalog's fallback tile id has no entry.
    #[error("default tile id {0} is not in the catalog")]
    UnknownDefaultTile(u16),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
