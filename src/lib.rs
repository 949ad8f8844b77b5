// THEORY:
// This file is the main entry point for the `ext_color` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the `ext-color` binary).
//
// The primary goal is to export the `ColorPipeline` and its associated data
// structures (`ExtractConfig`, `DominantColor`, `ColorError`) as the high-level
// interface for the whole extraction engine. The leaf stages live in
// `core_modules` and can be driven individually when a caller needs to.

pub mod config;
pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use config::{ExtractConfig, DEFAULT_COLORS, MAX_COLORS, MAX_HEIGHT, validate_color_count};
pub use core_modules::formatter::formatter::DominantColor;
pub use error::{ColorError, Result};
pub use pipeline::ColorPipeline;
