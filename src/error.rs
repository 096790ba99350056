use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("JPEG encoding error: {0}")]
    Encoding(#[from] jpeg_encoder::EncodingError),

    #[error("Image dimensions {0}x{1} exceed the JPEG limit of {2}x{2}")]
    DimensionsTooLarge(u32, u32, u32),

    #[error("Input file is empty, cannot compute size reduction")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, CompressionError>;
