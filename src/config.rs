// THEORY:
// The run configuration is a plain value, built once and handed to the pipeline.
// Nothing here is global or mutable: the CLI builds an `ExtractConfig`, validates it,
// and the pipeline reads it for the lifetime of a single extraction.

use crate::error::{ColorError, Result};

/// Largest number of colors a single run may extract.
pub const MAX_COLORS: usize = 10;
/// Color count used when the caller does not ask for one.
pub const DEFAULT_COLORS: usize = 3;
/// Images taller than this are downsampled before sampling.
pub const MAX_HEIGHT: u32 = 512;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for the ColorPipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Number of clusters (k) to extract, in [1, MAX_COLORS].
    pub colors: usize,
    /// Downsample ceiling applied to the image height.
    pub max_height: u32,
    /// Upper bound on k-means refinement passes.
    pub max_iterations: usize,
    /// Seed for the k-means++ initialization.
    pub seed: u64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            max_height: MAX_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl ExtractConfig {
    pub fn new(colors: usize) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_color_count(self.colors)?;
        Ok(())
    }
}

/// Checks a requested color count against [1, MAX_COLORS].
pub fn validate_color_count(requested: usize) -> Result<usize> {
    if requested == 0 || requested > MAX_COLORS {
        return Err(ColorError::InvalidColorCount {
            requested,
            max: MAX_COLORS,
        });
    }
    Ok(requested)
}
