//! Utility functions shared by the pipeline and the command line
//!
//! Path derivation, size arithmetic and report rendering live here so the
//! processing module only deals with pixels.

use crate::constants::{BYTES_PER_KB, COMPRESSED_SUFFIX, PROGRESS_SPINNER_TEMPLATE};
use crate::error::{CompressionError, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Derive the default output path for an input image
///
/// The last extension of the file name is dropped and `_compressed.jpg` is
/// appended, so `photos/cat.png` becomes `photos/cat_compressed.jpg`.
pub fn generate_output_path(input_path: &Path) -> PathBuf {
    match input_path.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(COMPRESSED_SUFFIX);
            input_path.with_file_name(name)
        }
        None => {
            let mut raw = OsString::from(input_path.as_os_str());
            raw.push(COMPRESSED_SUFFIX);
            PathBuf::from(raw)
        }
    }
}

/// Size in kilobytes, one decimal place
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / BYTES_PER_KB)
}

/// Percentage of the original size saved by compression
///
/// Negative when the output grew. An empty original has no meaningful
/// ratio and is reported as [`CompressionError::EmptyInput`].
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> Result<f64> {
    if original_size == 0 {
        return Err(CompressionError::EmptyInput);
    }
    Ok(((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0)
}

/// Before/after statistics of one compression run
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub original_dimensions: (u32, u32),
    pub original_size: u64,
    pub final_dimensions: (u32, u32),
    pub compressed_size: u64,
    pub reduction: f64,
    pub output_path: PathBuf,
}

impl CompressionReport {
    pub fn new(
        original_dimensions: (u32, u32),
        original_size: u64,
        final_dimensions: (u32, u32),
        compressed_size: u64,
        output_path: PathBuf,
    ) -> Result<Self> {
        let reduction = calculate_compression_ratio(original_size, compressed_size)?;
        Ok(Self {
            original_dimensions,
            original_size,
            final_dimensions,
            compressed_size,
            reduction,
            output_path,
        })
    }

    /// The four report lines, without the glyph prefix
    pub fn lines(&self) -> [String; 4] {
        let (ow, oh) = self.original_dimensions;
        let (fw, fh) = self.final_dimensions;
        [
            format!("Original: {}x{} ({})", ow, oh, format_kb(self.original_size)),
            format!("Compressed: {}x{} ({})", fw, fh, format_kb(self.compressed_size)),
            format!("Reduced by: {:.1}%", self.reduction),
            format!("Saved to: {}", self.output_path.display()),
        ]
    }

    pub fn print(&self) {
        for line in self.lines() {
            crate::info!("{}", line);
        }
        if self.reduction < 0.0 {
            crate::warn!("Output is {:.1}% larger than the input", self.reduction.abs());
        }
    }
}

/// Create a stderr spinner with consistent styling
///
/// Drawing is suppressed when stderr is not a terminal, so piped stdout
/// only ever carries the report.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(PROGRESS_SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}
