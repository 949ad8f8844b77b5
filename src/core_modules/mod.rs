pub mod clusterer;
pub mod color_vector;
pub mod formatter;
pub mod ranker;
pub mod sampler;
pub mod swatch;
pub mod terminal;
pub mod utils;
