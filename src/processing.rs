use crate::constants::{
    CODEC_DEFAULT_QUALITY, CODEC_DEFAULT_QUALITY_SENTINEL, DEFAULT_QUALITY, MAX_JPEG_DIMENSION,
    MAX_QUALITY, MIN_QUALITY,
};
use crate::error::{CompressionError, Result};
use crate::utils::{create_progress_spinner, generate_output_path, CompressionReport};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader, RgbImage};
use jpeg_encoder::{ColorType, Encoder};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct CompressionOptions {
    pub quality: i32,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CompressionOptions {
    /// Quality is kept verbatim; only the encoder decides what it accepts.
    /// A zero bound means "no bound", same as leaving it out.
    pub fn new(quality: Option<i32>, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            quality: quality.unwrap_or(DEFAULT_QUALITY),
            width: width.filter(|&w| w > 0),
            height: height.filter(|&h| h > 0),
        }
    }

    /// Bounding box for a `width`x`height` image, or `None` when no bound was requested.
    pub fn bounds_for(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        if self.width.is_none() && self.height.is_none() {
            return None;
        }
        Some((self.width.unwrap_or(width), self.height.unwrap_or(height)))
    }

    pub fn encoder_quality(&self) -> u8 {
        if self.quality == CODEC_DEFAULT_QUALITY_SENTINEL {
            return CODEC_DEFAULT_QUALITY;
        }
        self.quality.clamp(MIN_QUALITY, MAX_QUALITY) as u8
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// Core image processing pipeline: load -> resize -> normalize -> encode -> stat
///
/// # Arguments
/// * `input_path` - Path to the input image file
/// * `output_path` - Where the JPEG is written; any existing file is replaced
/// * `options` - Quality and bounding box
///
/// # Returns
/// * `Ok(CompressionReport)` - Before/after dimensions and sizes
/// * `Err(CompressionError)` - The first stage that failed
pub fn process_image_pipeline(
    input_path: &Path,
    output_path: &Path,
    options: &CompressionOptions,
) -> Result<CompressionReport> {
    let (mut img, original_size) = load_image_with_metadata(input_path)?;
    let original_dimensions = img.dimensions();
    crate::verbose!(
        "Decoded {}x{} {:?} ({} bytes)",
        original_dimensions.0,
        original_dimensions.1,
        img.color(),
        original_size
    );

    resize_image(&mut img, options);

    let rgb = normalize(img);
    let final_dimensions = rgb.dimensions();

    let compressed_size = process_and_save_image(&rgb, output_path, options)?;

    CompressionReport::new(
        original_dimensions,
        original_size,
        final_dimensions,
        compressed_size,
        output_path.to_path_buf(),
    )
}

/// Loads an image file and returns it along with its size in bytes.
///
/// The file handle lives only for the duration of this call.
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file = File::open(input_path)?;
    let file_size = file.metadata()?.len();

    let img = ImageReader::new(BufReader::new(file))
        .with_guessed_format()?
        .decode()?;

    Ok((img, file_size))
}

/// Target size for fitting `width`x`height` inside `max_width`x`max_height`.
///
/// Aspect ratio is preserved and the image is never enlarged. Each candidate
/// edge is the floor or ceiling of the exact scaled value, whichever keeps
/// the aspect ratio closer, and never less than one pixel.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || (max_width >= width && max_height >= height) {
        return (width, height);
    }

    let aspect = width as f64 / height as f64;
    let (x, y) = (max_width.max(1) as f64, max_height.max(1) as f64);

    if x / y >= aspect {
        let exact = y * aspect;
        let new_width = closest_edge(exact, |n| (aspect - n / y).abs());
        (new_width, max_height.max(1))
    } else {
        let exact = x / aspect;
        let new_height = closest_edge(exact, |n| {
            if n == 0.0 {
                0.0
            } else {
                (aspect - x / n).abs()
            }
        });
        (max_width.max(1), new_height)
    }
}

fn closest_edge(exact: f64, error: impl Fn(f64) -> f64) -> u32 {
    let (lo, hi) = (exact.floor(), exact.ceil());
    let best = if error(hi) < error(lo) { hi } else { lo };
    (best as u32).max(1)
}

/// Shrinks the image in place to fit the requested bounds. No-op without bounds.
pub fn resize_image(img: &mut DynamicImage, options: &CompressionOptions) {
    let (width, height) = img.dimensions();
    let Some((max_width, max_height)) = options.bounds_for(width, height) else {
        return;
    };

    let (new_width, new_height) = fit_within(width, height, max_width, max_height);
    if (new_width, new_height) == (width, height) {
        crate::verbose!("Already within {}x{}, not resizing", max_width, max_height);
        return;
    }

    crate::verbose!(
        "Resizing {}x{} -> {}x{}",
        width,
        height,
        new_width,
        new_height
    );
    *img = img.resize_exact(new_width, new_height, FilterType::Lanczos3);
}

/// Opaque 8-bit RGB version of any decoded image.
///
/// Images with an alpha channel are composited over white; everything else
/// is converted directly.
pub fn normalize(img: DynamicImage) -> RgbImage {
    if img.color().has_alpha() {
        flatten_onto_white(&img)
    } else {
        img.into_rgb8()
    }
}

fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::new(width, height);

    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let alpha = src[3] as u32;
        for channel in 0..3 {
            let c = src[channel] as u32;
            dst[channel] = ((c * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        }
    }

    out
}

/// Encodes `img` as JPEG with optimized Huffman tables and writes it to `output_path`.
pub fn save_image(img: &RgbImage, output_path: &Path, options: &CompressionOptions) -> Result<()> {
    let (width, height) = img.dimensions();
    if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(CompressionError::DimensionsTooLarge(
            width,
            height,
            MAX_JPEG_DIMENSION,
        ));
    }

    let quality = options.encoder_quality();
    crate::verbose!("Encoding JPEG at quality {}", quality);

    let mut writer = BufWriter::new(File::create(output_path)?);
    let mut encoder = Encoder::new(&mut writer, quality);
    encoder.set_optimized_huffman_tables(true);
    encoder.encode(img.as_raw(), width as u16, height as u16, ColorType::Rgb)?;
    writer.flush()?;

    Ok(())
}

/// Saves the image and returns the size of the written file.
pub fn process_and_save_image(
    img: &RgbImage,
    output_path: &Path,
    options: &CompressionOptions,
) -> Result<u64> {
    save_image(img, output_path, options)?;
    let compressed_size = fs::metadata(output_path)?.len();
    Ok(compressed_size)
}

/// Compress one image and print the outcome.
///
/// Every failure is reported as a single `✗ Error:` line; the return value
/// tells the caller whether a JPEG was produced.
pub fn compress_image(input: &Path, output: Option<&Path>, options: &CompressionOptions) -> bool {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| generate_output_path(input));

    let pb = create_progress_spinner("Compressing image...");
    let result = process_image_pipeline(input, &output, options);
    pb.finish_and_clear();

    match result {
        Ok(report) => {
            report.print();
            true
        }
        Err(e) => {
            crate::error!("{}", e);
            false
        }
    }
}
