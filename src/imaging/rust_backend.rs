//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header-only read) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate, format sniffed from content |
//! | Flatten / strip metadata | `DynamicImage::to_rgb8` + raw-buffer rebuild |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageEncoder, ImageReader, RgbImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from file content, not the extension — any input
/// the compiled-in decoders recognize is accepted.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode(format!("failed to decode {}: {}", path.display(), e)))
}

/// Flatten to plain RGB8 and rebuild the buffer from the raw pixel data.
///
/// Palette, grayscale, and alpha-carrying inputs all convert to RGB here;
/// transparency is dropped, not composited. Rebuilding from the raw buffer
/// severs anything the decoder carried besides pixels (EXIF, ICC profile,
/// orientation), so the encoder only ever sees pixel data.
fn flatten_to_rgb(img: DynamicImage) -> Result<RgbImage, BackendError> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    RgbImage::from_raw(width, height, rgb.into_raw()).ok_or_else(|| {
        BackendError::Decode("failed to rebuild image from decoded pixel data".into())
    })
}

/// Encode and save as JPEG at the given quality.
fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality);
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| BackendError::Encode(format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .into_dimensions()
            .map_err(|e| {
                BackendError::Decode(format!(
                    "failed to read dimensions of {}: {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let flat = flatten_to_rgb(img)?;
        let resized = image::imageops::resize(
            &flat,
            params.width,
            params.height,
            FilterType::Lanczos3,
        );
        save_jpeg(&resized, &params.output, params.quality.value())
    }
}
