//! CLI output formatting.
//!
//! The format function is pure — no I/O, returns lines — so tests can assert
//! on exact output; the `print_*` wrapper writes to stdout.

use crate::imaging::CopyReport;
use std::path::Path;

/// Filename for display; falls back to the full path for pathological inputs.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format the one-line summary for a completed copy.
///
/// ```text
/// photo.png (1000x500) → photo_copy.jpg (200x100)
/// ```
pub fn format_copy_report(report: &CopyReport) -> Vec<String> {
    let (src_w, src_h) = report.source_dims;
    let (out_w, out_h) = report.target_dims;
    vec![format!(
        "{} ({}x{}) → {} ({}x{})",
        display_name(&report.source),
        src_w,
        src_h,
        display_name(&report.destination),
        out_w,
        out_h,
    )]
}

/// Print the copy summary to stdout.
pub fn print_copy_report(report: &CopyReport) {
    for line in format_copy_report(report) {
        println!("{}", line);
    }
}
