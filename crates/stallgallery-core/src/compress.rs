//! Photo compressor - shrinks gallery photos for web delivery
//!
//! Each photo is decoded, flattened onto a white background, scaled down so
//! its longest side fits `max_size`, and re-encoded in place as JPEG. File
//! names are left untouched so the manifest stays valid.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader, Rgb, RgbImage};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::{GalleryError, GalleryResult};
use crate::scanner::is_supported_image;

/// Longest side after compression, in pixels
pub const DEFAULT_MAX_SIZE: u32 = 1200;

/// JPEG quality used for re-encoding
pub const DEFAULT_QUALITY: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    pub max_size: u32,
    pub quality: u8,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Outcome for one photo
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    pub path: PathBuf,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl CompressionStats {
    /// Size reduction in percent (negative if the file grew)
    pub fn reduction_percent(&self) -> f64 {
        reduction(self.original_bytes, self.compressed_bytes)
    }
}

/// Outcome for a whole photos tree
#[derive(Debug, Default)]
pub struct CompressionReport {
    pub compressed: Vec<CompressionStats>,
    /// Photos that could not be processed, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

impl CompressionReport {
    pub fn total_original(&self) -> u64 {
        self.compressed.iter().map(|s| s.original_bytes).sum()
    }

    pub fn total_compressed(&self) -> u64 {
        self.compressed.iter().map(|s| s.compressed_bytes).sum()
    }

    pub fn reduction_percent(&self) -> f64 {
        reduction(self.total_original(), self.total_compressed())
    }
}

fn reduction(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (before as f64 - after as f64) / before as f64 * 100.0
}

/// Compress a single photo in place
pub fn compress_image(path: &Path, options: &CompressOptions) -> GalleryResult<CompressionStats> {
    let original_bytes = fs::metadata(path)?.len();

    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let mut rgb = flatten_onto_white(&decoded);

    let (width, height) = rgb.dimensions();
    if width.max(height) > options.max_size {
        rgb = DynamicImage::ImageRgb8(rgb)
            .resize(options.max_size, options.max_size, FilterType::Lanczos3)
            .to_rgb8();
    }

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, options.quality).encode_image(&rgb)?;
    fs::write(path, &buffer)?;

    Ok(CompressionStats {
        path: path.to_path_buf(),
        original_bytes,
        compressed_bytes: buffer.len() as u64,
    })
}

fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Compress every supported photo below `photos_dir`.
///
/// Per-photo failures are recorded in the report and do not stop the run.
pub fn compress_all(photos_dir: &Path, options: &CompressOptions) -> GalleryResult<CompressionReport> {
    if !photos_dir.is_dir() {
        return Err(GalleryError::PhotosDirMissing(photos_dir.to_path_buf()));
    }

    let mut report = CompressionReport::default();
    for entry in WalkDir::new(photos_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_supported_image(entry.path()) {
            continue;
        }

        match compress_image(entry.path(), options) {
            Ok(stats) => {
                info!(
                    "Compressed {}: {:.1} KB -> {:.1} KB ({:.1}%)",
                    entry.path().display(),
                    stats.original_bytes as f64 / 1024.0,
                    stats.compressed_bytes as f64 / 1024.0,
                    stats.reduction_percent()
                );
                report.compressed.push(stats);
            }
            Err(e) => {
                warn!("Error compressing {}: {}", entry.path().display(), e);
                report.failures.push((entry.path().to_path_buf(), e.to_string()));
            }
        }
    }

    Ok(report)
}
