pub mod image_helper {
    use image::codecs::jpeg::JpegEncoder;
    use image::codecs::png::PngEncoder;
    use image::{ImageEncoder, ImageFormat, RgbImage};
    use std::path::Path;

    pub const JPEG_QUALITY: u8 = 95;

    /// PNG when the path says so, JPEG otherwise.
    pub fn format_for(path: &Path) -> ImageFormat {
        match ImageFormat::from_path(path) {
            Ok(ImageFormat::Png) => ImageFormat::Png,
            _ => ImageFormat::Jpeg,
        }
    }

    pub fn encode(image: &RgbImage, format: ImageFormat) -> Result<Vec<u8>, image::error::ImageError> {
        let mut buffer = Vec::new();
        let (width, height) = image.dimensions();

        if format == ImageFormat::Png {
            let encoder = PngEncoder::new(&mut buffer);
            encoder.write_image(image.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;
        } else {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
            encoder.write_image(image.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;
        }

        Ok(buffer)
    }
}
