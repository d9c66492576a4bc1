//! High-level copy operation.
//!
//! [`create_copy`] combines the pure dimension math with backend execution:
//! it decides *what* to produce (target dimensions, destination path) and
//! hands the pixel work to an [`ImageBackend`].

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::scaled_dimensions;
use super::params::{Quality, ResizeParams};
use crate::naming;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error(
        "target dimensions {width}x{height} are degenerate; the source must be at least 5px on each axis"
    )]
    DegenerateTarget { width: u32, height: u32 },
}

/// Transform parameters: 20% linear scale, quality-95 JPEG.
///
/// These are the tool's two constants. The struct exists so the operation
/// and its tests share one definition, not to make them configurable — the
/// CLI exposes no knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopyConfig {
    pub scale: f64,
    pub quality: Quality,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            scale: 0.2,
            quality: Quality::default(),
        }
    }
}

/// Outcome of a successful copy, for display.
#[derive(Debug, Clone)]
pub struct CopyReport {
    pub source: PathBuf,
    pub source_dims: (u32, u32),
    pub target_dims: (u32, u32),
    pub destination: PathBuf,
}

/// Produce the shrunk JPEG copy of `source`.
///
/// Reads the source dimensions, computes the target size (floor of each
/// axis × scale), rejects targets with a zero-length axis before any pixel
/// work or file write, derives the `<stem>_copy.jpg` destination, and runs
/// the backend's decode → flatten → resize → encode chain.
///
/// All-or-nothing: the first failure aborts the operation. Nothing is
/// retried and no partial output is cleaned up.
pub fn create_copy(
    backend: &impl ImageBackend,
    source: &Path,
    config: &CopyConfig,
) -> Result<CopyReport, CopyError> {
    let Dimensions { width, height } = backend.identify(source)?;

    let (new_width, new_height) = scaled_dimensions((width, height), config.scale);
    if new_width == 0 || new_height == 0 {
        return Err(CopyError::DegenerateTarget {
            width: new_width,
            height: new_height,
        });
    }

    let destination = naming::copy_destination(source);
    backend.resize(&ResizeParams {
        source: source.to_path_buf(),
        output: destination.clone(),
        width: new_width,
        height: new_height,
        quality: config.quality,
    })?;

    Ok(CopyReport {
        source: source.to_path_buf(),
        source_dims: (width, height),
        target_dims: (new_width, new_height),
        destination,
    })
}
