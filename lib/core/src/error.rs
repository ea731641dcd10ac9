use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("Place index out of range: {index} (catalog has {len} places)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Duplicate place name {name:?} at rows {first} and {second}")]
    DuplicatePlace { name: String, first: usize, second: usize },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Malformed catalog {}: {message}", path.display())]
    MalformedCatalog { path: PathBuf, message: String },

    #[error("Malformed similarity matrix: {0}")]
    MalformedMatrix(String),

    #[error("Matrix dimension mismatch: catalog has {places} places, matrix is {rows}x{cols}")]
    DimensionMismatch { places: usize, rows: usize, cols: usize },

    #[error("Catalog unavailable: {0}")]
    Unavailable(Arc<Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by query input rather than by the loaded data.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::PlaceNotFound(_) | Error::IndexOutOfRange { .. } | Error::InvalidQuery(_)
        )
    }
}
