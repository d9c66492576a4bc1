//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations a backend must
//! support: identify and resize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Both operations must be implemented so the rest of the codebase is
/// backend-agnostic: `identify` reads dimensions without a full decode,
/// `resize` runs the whole decode → flatten → resample → JPEG-encode chain.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a shrink-to-JPEG operation.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
