// THEORY:
// The `pipeline` module is the top-level API for the extraction engine.
// It runs the four stages strictly in sequence for one image:
//
//   Sampler -> Clusterer -> Formatter -> Ranker
//
// Each stage only consumes the output of the previous one. The pipeline either
// produces the full ranked list of colors or fails as a unit; there is no partial
// output. An image that yields no pixels is not a failure: the run short-circuits
// before clustering and returns an empty palette.

use crate::config::ExtractConfig;
use crate::core_modules::clusterer::kmeans;
use crate::core_modules::color_vector::color_vector::ColorVector;
use crate::core_modules::formatter::formatter::{DominantColor, format_clusters};
use crate::core_modules::ranker::rank;
use crate::core_modules::sampler::sampler;
use crate::error::Result;
use image::DynamicImage;
use log::{debug, info, warn};
use std::path::Path;

/// The main, top-level struct for the extraction engine.
#[derive(Debug, Clone)]
pub struct ColorPipeline {
    config: ExtractConfig,
}

impl ColorPipeline {
    /// Validates `config` and builds a pipeline around it.
    pub fn new(config: ExtractConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extracts the ranked dominant colors of the image at `path`.
    pub fn extract(&self, path: &Path) -> Result<Vec<DominantColor>> {
        // Stage 1: Sampling
        let vectors = sampler::sample(path, self.config.max_height)?;
        self.extract_vectors(&vectors)
    }

    /// Same as [`extract`](Self::extract) for an already decoded image.
    pub fn extract_image(&self, image: DynamicImage) -> Result<Vec<DominantColor>> {
        let image = sampler::downsample(image, self.config.max_height);
        self.extract_vectors(&sampler::vectors(&image))
    }

    /// Runs the clustering, formatting and ranking stages over sampled vectors.
    pub fn extract_vectors(&self, vectors: &[ColorVector]) -> Result<Vec<DominantColor>> {
        if vectors.is_empty() {
            warn!("no pixels sampled, skipping clustering");
            return Ok(Vec::new());
        }

        // Stage 2: Clustering
        let result = kmeans(
            vectors,
            self.config.colors,
            self.config.max_iterations,
            self.config.seed,
        )?;
        debug!(
            "clustered {} vectors into {} clusters",
            result.total(),
            result.clusters.len()
        );

        // Stage 3: Formatting
        let colors = format_clusters(&result.clusters, vectors.len());

        // Stage 4: Ranking
        let ranked = rank(colors);
        info!(
            "extracted {} colors from {} pixels in {} iterations",
            ranked.len(),
            vectors.len(),
            result.iterations
        );
        Ok(ranked)
    }
}
