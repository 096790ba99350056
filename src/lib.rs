pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod utils;

pub use error::{CompressionError, Result};
pub use processing::{
    compress_image, fit_within, load_image_with_metadata, normalize, process_and_save_image,
    process_image_pipeline, resize_image, save_image, CompressionOptions,
};
pub use utils::{calculate_compression_ratio, generate_output_path, CompressionReport};
