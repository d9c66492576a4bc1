//! Output-path derivation for the `_copy` naming convention.
//!
//! The copy lands next to its source: same directory, the source's filename
//! stem with `_copy` appended, and a `.jpg` extension regardless of what the
//! source was called. The content is always JPEG, so the name always agrees
//! with it.
//!
//! | Input | Output |
//! |-------|--------|
//! | `photo.png` | `photo_copy.jpg` |
//! | `archive.2023.jpg` | `archive.2023_copy.jpg` |
//! | `scan` | `scan_copy.jpg` |

use std::path::{Path, PathBuf};

/// Derive the destination path for the shrunk copy of `input`.
///
/// The stem is everything before the *final* dot of the filename
/// ([`Path::file_stem`] semantics), so only the last extension component is
/// replaced — `archive.2023.jpg` keeps its `archive.2023` stem.
pub fn copy_destination(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_copy.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension_with_jpg() {
        assert_eq!(
            copy_destination(Path::new("photo.png")),
            Path::new("photo_copy.jpg")
        );
    }

    #[test]
    fn jpeg_input_keeps_jpg_extension() {
        assert_eq!(
            copy_destination(Path::new("photo.jpg")),
            Path::new("photo_copy.jpg")
        );
    }

    #[test]
    fn multi_dot_stem_keeps_inner_dots() {
        // Only the final extension component is the extension
        assert_eq!(
            copy_destination(Path::new("archive.2023.jpg")),
            Path::new("archive.2023_copy.jpg")
        );
    }

    #[test]
    fn extensionless_input() {
        assert_eq!(
            copy_destination(Path::new("scan")),
            Path::new("scan_copy.jpg")
        );
    }

    #[test]
    fn dotfile_name_is_its_own_stem() {
        assert_eq!(
            copy_destination(Path::new(".hidden")),
            Path::new(".hidden_copy.jpg")
        );
    }

    #[test]
    fn directory_is_preserved() {
        assert_eq!(
            copy_destination(Path::new("/some/dir/photo.tiff")),
            Path::new("/some/dir/photo_copy.jpg")
        );
    }

    #[test]
    fn uppercase_extension_is_still_replaced() {
        assert_eq!(
            copy_destination(Path::new("PHOTO.PNG")),
            Path::new("PHOTO_copy.jpg")
        );
    }
}
