//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Decode** | `image` crate decoders, format sniffed from content |
//! | **Resize** | Lanczos3 via `image::imageops::resize` |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder`, quality 95 |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level [`create_copy`] combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::scaled_dimensions;
pub use operations::{CopyConfig, CopyError, CopyReport, create_copy};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
// Re-exported for tests (operations.rs tests use this)
#[cfg(test)]
pub use backend::Dimensions;
