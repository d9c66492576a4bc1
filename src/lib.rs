//! # shrinkcopy
//!
//! Writes a 20%-scale, metadata-stripped JPEG copy of a single image file.
//! Given `photo.png`, produces `photo_copy.jpg` in the same directory:
//! decoded, flattened to plain RGB, resampled with Lanczos3, and re-encoded
//! as a quality-95 JPEG.
//!
//! # Pipeline
//!
//! The whole tool is one linear operation:
//!
//! ```text
//! decode → flatten to RGB (drops alpha + embedded metadata) → resize to 20% → encode JPEG q95
//! ```
//!
//! There is no configuration, no batch mode, and no recovery: any failure at
//! any step aborts the run with a non-zero exit.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Pure-Rust image operations: decode, RGB flatten, Lanczos3 resize, JPEG encode |
//! | [`naming`] | Output-path derivation: the `<stem>_copy.jpg` stem-replacement rule |
//! | [`output`] | CLI output formatting — pure format functions, printed from `main` |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! All pixel work goes through the `image` crate — pure Rust decoders and
//! encoder, statically linked. No ImageMagick, no system libraries: the
//! binary is fully self-contained.
//!
//! ## Metadata Stripping by Reconstruction
//!
//! Rather than filtering metadata segments out of the source file, the
//! decoded image is rebuilt from its raw pixel buffer alone. Whatever the
//! decoder carried along (EXIF, ICC profile, orientation) never reaches the
//! encoder, so the output contains pixels and nothing else.
//!
//! ## Lanczos3 Resampling
//!
//! A 5× downscale with nearest or bilinear filtering aliases badly. Lanczos3
//! costs more compute but is the right trade for a one-shot tool whose only
//! job is producing a good-looking small copy.

pub mod imaging;
pub mod naming;
pub mod output;
