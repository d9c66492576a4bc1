//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate target dimensions for a uniform downscale.
///
/// Each axis is scaled independently and truncated toward zero — the same
/// floor-per-axis rule on width and height, so a 1000×500 source at scale
/// 0.2 becomes exactly 200×100.
///
/// No minimum size is enforced: a source axis shorter than `1 / scale`
/// pixels produces a zero-length target axis. Callers must reject those
/// before encoding (see
/// [`create_copy`](super::operations::create_copy)).
///
/// # Examples
/// ```
/// # use shrinkcopy::imaging::scaled_dimensions;
/// assert_eq!(scaled_dimensions((1000, 500), 0.2), (200, 100));
/// // Truncation, not rounding: 999 × 0.2 = 199.8 → 199
/// assert_eq!(scaled_dimensions((999, 500), 0.2), (199, 100));
/// // Degenerate: 4 × 0.2 = 0.8 → 0
/// assert_eq!(scaled_dimensions((4, 100), 0.2), (0, 20));
/// ```
pub fn scaled_dimensions(source: (u32, u32), scale: f64) -> (u32, u32) {
    let (w, h) = source;
    (
        (w as f64 * scale).floor() as u32,
        (h as f64 * scale).floor() as u32,
    )
}
