// THEORY:
// The `Swatch` renderer draws the ranked colors as a summary image: a white canvas
// with one horizontal band per color. Each band holds a solid block of the color on
// the left and its hex label on the right, drawn in the same color.
//
// Labels use a tiny built-in 5x7 bitmap font that only knows the characters a hex
// color can contain (`#`, `0-9`, `A-F`), scaled 2x. Encoding to bytes is left to
// `image_helper`, so this module never touches the filesystem.

use crate::core_modules::formatter::formatter::DominantColor;
use image::{Rgb, RgbImage};

pub const IMAGE_WIDTH: u32 = 512;
pub const BAND_HEIGHT: u32 = 50;
pub const COLOR_WIDTH: u32 = 400;
pub const LABEL_X: u32 = 430;
/// Baseline of the label, measured from the top of its band.
pub const LABEL_BASELINE: u32 = 30;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SCALE: u32 = 2;
const GLYPH_ADVANCE: u32 = (GLYPH_WIDTH + 1) * GLYPH_SCALE;

/// Renders one band per color, top to bottom in the given order.
pub fn render(colors: &[DominantColor]) -> RgbImage {
    let height = BAND_HEIGHT * colors.len() as u32;
    let mut canvas = RgbImage::from_pixel(IMAGE_WIDTH, height, BACKGROUND);

    for (i, color) in colors.iter().enumerate() {
        let top = i as u32 * BAND_HEIGHT;
        let fill = Rgb(color.rgb);

        for y in top..top + BAND_HEIGHT {
            for x in 0..COLOR_WIDTH {
                canvas.put_pixel(x, y, fill);
            }
        }

        let label_top = top + LABEL_BASELINE - GLYPH_HEIGHT * GLYPH_SCALE;
        draw_text(&mut canvas, &color.hex, LABEL_X, label_top, fill);
    }

    canvas
}

fn draw_text(canvas: &mut RgbImage, text: &str, x: u32, y: u32, color: Rgb<u8>) {
    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let origin_x = x + i as u32 * GLYPH_ADVANCE;

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                for dy in 0..GLYPH_SCALE {
                    for dx in 0..GLYPH_SCALE {
                        let px = origin_x + col * GLYPH_SCALE + dx;
                        let py = y + row as u32 * GLYPH_SCALE + dy;
                        if px < canvas.width() && py < canvas.height() {
                            canvas.put_pixel(px, py, color);
                        }
                    }
                }
            }
        }
    }
}

/// 5x7 rows, most significant of the low five bits is the leftmost column.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch.to_ascii_uppercase() {
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<DominantColor> {
        vec![
            DominantColor::new([255, 0, 0], 0.5),
            DominantColor::new([0, 255, 0], 0.25),
            DominantColor::new([0, 0, 255], 0.25),
        ]
    }

    #[test]
    fn one_band_per_color() {
        let image = render(&colors());
        assert_eq!(image.dimensions(), (IMAGE_WIDTH, 3 * BAND_HEIGHT));
    }

    #[test]
    fn bands_are_filled_in_order() {
        let image = render(&colors());
        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(image.get_pixel(COLOR_WIDTH - 1, BAND_HEIGHT - 1), &Rgb([255, 0, 0]));
        assert_eq!(image.get_pixel(10, BAND_HEIGHT + 10), &Rgb([0, 255, 0]));
        assert_eq!(image.get_pixel(10, 2 * BAND_HEIGHT + 10), &Rgb([0, 0, 255]));
    }

    #[test]
    fn gap_between_block_and_label_stays_white() {
        let image = render(&colors());
        for y in 0..image.height() {
            assert_eq!(image.get_pixel(COLOR_WIDTH + 5, y), &BACKGROUND);
        }
    }

    #[test]
    fn label_is_drawn_in_the_band_color() {
        let image = render(&colors()[..1]);
        let label_pixels: Vec<&Rgb<u8>> = image
            .enumerate_pixels()
            .filter(|(x, _, _)| *x >= LABEL_X)
            .map(|(_, _, p)| p)
            .filter(|p| **p != BACKGROUND)
            .collect();

        assert!(!label_pixels.is_empty());
        assert!(label_pixels.iter().all(|p| **p == Rgb([255, 0, 0])));
    }

    #[test]
    fn every_hex_character_has_a_glyph() {
        for ch in "#0123456789ABCDEF".chars() {
            assert!(glyph(ch).is_some(), "{}", ch);
        }
        assert!(glyph('G').is_none());
    }

    #[test]
    fn empty_palette_renders_an_empty_canvas() {
        let image = render(&[]);
        assert_eq!(image.dimensions(), (IMAGE_WIDTH, 0));
    }
}
