// THEORY:
// The `Sampler` is the bridge between a file on disk and the clustering layer.
// It performs the first and only data transformation that touches real image data:
// decode, bound the pixel count, and flatten the result into `ColorVector`s.
//
// Key principles:
// 1.  **Bounded work**: Images taller than the configured ceiling are resized so the
//     height equals the ceiling and the width keeps the aspect ratio
//     (`floor(width / (height / max_height))`). Shorter images are used as-is.
// 2.  **Width first**: `image::DynamicImage::resize_exact` takes `(width, height)`.
//     The computed pair is always passed in that order, so the output is never
//     transposed or distorted.
// 3.  **Known stride**: Every decoded image is normalized to RGBA8 and walked in
//     steps of four bytes. The fourth byte (alpha) is dropped by `ColorVector`.
// 4.  **Raster order**: Vectors come out row-major, left-to-right, top-to-bottom.

use crate::core_modules::color_vector::color_vector::{CHANNELS, ColorVector};
use crate::error::{ColorError, Result};
use image::DynamicImage;
use image::imageops::FilterType;
use log::debug;
use std::path::Path;

pub mod sampler {
    use super::*;

    /// Decodes the image at `path`.
    pub fn load(path: &Path) -> Result<DynamicImage> {
        image::open(path).map_err(|source| ColorError::decode(path, source))
    }

    /// Chooses the (width, height) to sample at for a given ceiling.
    pub fn target_dimensions(width: u32, height: u32, max_height: u32) -> (u32, u32) {
        let max_height = max_height.max(1);
        if height <= max_height {
            return (width, height);
        }

        let ratio = height as f64 / max_height as f64;
        let new_width = (width as f64 / ratio).floor() as u32;
        (new_width.max(1), max_height)
    }

    /// Resizes `image` when it is taller than `max_height`.
    pub fn downsample(image: DynamicImage, max_height: u32) -> DynamicImage {
        let (width, height) = (image.width(), image.height());
        let (new_width, new_height) = target_dimensions(width, height, max_height);
        if (new_width, new_height) == (width, height) {
            return image;
        }

        debug!(
            "downsampling {}x{} -> {}x{}",
            width, height, new_width, new_height
        );
        image.resize_exact(new_width, new_height, FilterType::Lanczos3)
    }

    /// Flattens every pixel of `image` into a `ColorVector`, in raster order.
    pub fn vectors(image: &DynamicImage) -> Vec<ColorVector> {
        let buffer = image.to_rgba8();
        buffer
            .as_raw()
            .chunks_exact(CHANNELS)
            .map(ColorVector::from)
            .collect()
    }

    /// Decodes, downsamples and flattens the image at `path`.
    pub fn sample(path: &Path, max_height: u32) -> Result<Vec<ColorVector>> {
        let image = downsample(load(path)?, max_height);
        let vectors = vectors(&image);
        debug!(
            "sampled {} vectors from {} ({}x{})",
            vectors.len(),
            path.display(),
            image.width(),
            image.height()
        );
        Ok(vectors)
    }
}
