// The `ext-color` binary: a thin CLI around the `ext_color` library.
// It parses and validates arguments, runs the pipeline off the async runtime,
// and hands the ranked colors to the terminal printer and the swatch renderer.

use anyhow::{Context, Result};
use clap::Parser;
use ext_color::core_modules::swatch;
use ext_color::core_modules::terminal;
use ext_color::core_modules::utils::image_helper::image_helper;
use ext_color::{ColorPipeline, DEFAULT_COLORS, DominantColor, ExtractConfig, MAX_COLORS};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ext-color",
    version = "1.0.0",
    about = "CLI to get dominant colors out of an image"
)]
struct Cli {
    /// image path
    #[arg(short = 'p', long = "path")]
    path: PathBuf,

    /// the number of colors to extract from image, range = [1,10]
    #[arg(short = 'c', long = "color", default_value_t = DEFAULT_COLORS, value_parser = parse_color_count)]
    color: usize,

    /// write a swatch image of the colors (PNG for .png, JPEG otherwise)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// print the colors as JSON instead of colored text
    #[arg(long)]
    json: bool,
}

fn parse_color_count(value: &str) -> Result<usize, String> {
    let parsed: usize = value
        .trim()
        .parse()
        .map_err(|_| "c is not a number".to_string())?;
    ext_color::validate_color_count(parsed).map_err(|_| format!("range of c is [1,{}]", MAX_COLORS))
}

fn print_colors(colors: &[DominantColor]) {
    for color in colors {
        println!("{}", terminal::format_line(color));
    }
}

async fn write_swatch(colors: Vec<DominantColor>, output: PathBuf) -> Result<()> {
    let format = image_helper::format_for(&output);
    let bytes = tokio::task::spawn_blocking(move || {
        let canvas = swatch::render(&colors);
        image_helper::encode(&canvas, format)
    })
    .await
    .context("swatch task failed")?
    .map_err(|source| ext_color::ColorError::Encode { source })?;

    tokio::fs::write(&output, bytes)
        .await
        .with_context(|| format!("Failed to write swatch to {}", output.display()))?;
    info!("wrote swatch to {}", output.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let pipeline = ColorPipeline::new(ExtractConfig::new(cli.color))?;

    let path = cli.path.clone();
    let colors = tokio::task::spawn_blocking(move || pipeline.extract(&path))
        .await
        .context("extraction task failed")??;

    if colors.is_empty() {
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&colors)?);
    } else {
        print_colors(&colors);
    }

    if let Some(output) = cli.output {
        write_swatch(colors, output).await?;
    }

    Ok(())
}
