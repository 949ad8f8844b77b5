// THEORY:
// The `Formatter` turns the clusterer's numeric output into presentation records.
// It is a stateless utility: one `DominantColor` per `Cluster`, in cluster order,
// never merging two clusters even when they format to the same hex string.
//
// Key rules:
// 1.  **Floor, not round**: Centroid components are floored before conversion, so a
//     centroid of (254.9, 0.2, 0.0) reports as `#FE0000`.
// 2.  **Clamped hex**: Each floored component is clamped to [0, 255] and written as two
//     uppercase hex digits, in R, G, B order, behind a `#`.
// 3.  **Fixed precision**: The fraction `size / total` is rounded to 4 decimal places.

use crate::core_modules::clusterer::{Centroid, Cluster};
use serde::Serialize;

pub mod formatter {
    use super::*;

    pub type Percentage = f64;

    const PRECISION: f64 = 10_000.0;

    /// A dominant color as handed to the presentation layer.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct DominantColor {
        /// `#RRGGBB`, uppercase.
        pub hex: String,
        /// Share of sampled pixels in [0, 1], 4 decimal places.
        pub percentage: Percentage,
        /// The same color as bytes, for renderers.
        #[serde(skip)]
        pub rgb: [u8; 3],
    }

    impl DominantColor {
        pub fn new(rgb: [u8; 3], percentage: Percentage) -> Self {
            Self {
                hex: rgb_to_hex(rgb),
                percentage,
                rgb,
            }
        }
    }

    /// Floors and clamps each centroid component into a byte.
    pub fn centroid_to_rgb(centroid: &Centroid) -> [u8; 3] {
        centroid.map(|component| component.floor().clamp(0.0, 255.0) as u8)
    }

    pub fn rgb_to_hex([red, green, blue]: [u8; 3]) -> String {
        format!("#{:02X}{:02X}{:02X}", red, green, blue)
    }

    /// `count / total`, rounded to 4 decimal places.
    pub fn fraction(count: usize, total: usize) -> Percentage {
        if total == 0 {
            return 0.0;
        }
        let raw = count as f64 / total as f64;
        (raw * PRECISION).round() / PRECISION
    }

    /// One `DominantColor` per cluster, in cluster order.
    pub fn format_clusters(clusters: &[Cluster], total: usize) -> Vec<DominantColor> {
        clusters
            .iter()
            .map(|cluster| {
                DominantColor::new(
                    centroid_to_rgb(&cluster.centroid),
                    fraction(cluster.size, total),
                )
            })
            .collect()
    }
}
