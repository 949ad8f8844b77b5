// THEORY:
// The `Ranker` is the last stage before presentation. It orders the formatted colors
// by percentage, largest first. The sort is stable: colors with equal percentages keep
// the order the clusterer produced them in, which keeps output reproducible.

use crate::core_modules::formatter::formatter::DominantColor;

pub fn rank(mut colors: Vec<DominantColor>) -> Vec<DominantColor> {
    // `sort_by` is stable.
    colors.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    colors
}
