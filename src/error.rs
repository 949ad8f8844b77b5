//! Error types for the ext_color library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ext_color operations
pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Error, Debug)]
pub enum ColorError {
    /// The path does not point to a readable, decodable image.
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid color count: {requested} (range = [1,{max}])")]
    InvalidColorCount { requested: usize, max: usize },

    #[error("Cannot cluster an empty set of color vectors")]
    EmptyInput,

    /// The swatch image could not be encoded.
    #[error("Failed to encode swatch image: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },
}

impl ColorError {
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// True for the failures raised by the clusterer or its input validation.
    pub fn is_cluster_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidColorCount { .. } | ColorError::EmptyInput
        )
    }
}
