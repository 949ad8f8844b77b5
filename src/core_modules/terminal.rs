// Terminal presentation: a 24-bit color block, the hex label and the percentage,
// each line styled with ANSI escape sequences.

use crate::core_modules::formatter::formatter::DominantColor;

const RESET: &str = "\x1b[0m";
const BLOCK: &str = "        ";

pub fn format_line(color: &DominantColor) -> String {
    let [r, g, b] = color.rgb;
    let background = format!("\x1b[48;2;{};{};{}m", r, g, b);
    let foreground = format!("\x1b[38;2;{};{};{}m", r, g, b);

    format!(
        "{background}{BLOCK}{RESET}   {foreground}{}{RESET}   {foreground}{}{RESET}",
        color.hex,
        percent_label(color.percentage),
    )
}

/// `0.5` -> `50.00%`
pub fn percent_label(percentage: f64) -> String {
    format!("{:.2}%", percentage * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_label_has_two_decimals() {
        assert_eq!(percent_label(0.5), "50.00%");
        assert_eq!(percent_label(0.3333), "33.33%");
        assert_eq!(percent_label(1.0), "100.00%");
    }

    #[test]
    fn line_carries_block_hex_and_percentage() {
        let line = format_line(&DominantColor::new([255, 128, 0], 0.25));
        assert!(line.starts_with("\x1b[48;2;255;128;0m        \x1b[0m"));
        assert!(line.contains("\x1b[38;2;255;128;0m#FF8000\x1b[0m"));
        assert!(line.ends_with("\x1b[38;2;255;128;0m25.00%\x1b[0m"));
    }
}
