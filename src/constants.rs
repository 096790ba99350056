pub const DEFAULT_QUALITY: i32 = 85;
pub const MIN_QUALITY: i32 = 1;
pub const MAX_QUALITY: i32 = 100;

/// `-1` asks for the codec's own default rather than a specific quality.
pub const CODEC_DEFAULT_QUALITY_SENTINEL: i32 = -1;
pub const CODEC_DEFAULT_QUALITY: u8 = 75;

/// Largest edge a baseline JPEG frame header can describe.
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

pub const COMPRESSED_SUFFIX: &str = "_compressed.jpg";
pub const BYTES_PER_KB: f64 = 1024.0;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Report line prefixes
pub const SUCCESS_PREFIX: &str = "✓";
pub const ERROR_PREFIX: &str = "✗";
pub const VERBOSE_PREFIX: &str = "🔍";
pub const WARNING_PREFIX: &str = "⚠️ ";
