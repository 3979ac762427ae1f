// SPDX-License-Identifier: MPL-2.0
//! Media handling for the shirt artwork.
//!
//! Images are read asynchronously, decoded to RGBA, and handed to the UI as
//! an `iced` image handle. The file picker filter lives here too.

pub mod image;

pub use image::{display_name, load_image, SelectedImage};

use crate::config::IMAGE_EXTENSIONS;
use std::path::{Path, PathBuf};

/// Opens the native file picker filtered to image files.
///
/// Resolves to `None` when the user cancels.
pub async fn pick_image_file(filter_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter(filter_name, IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Checks whether a path has one of the picker's image extensions.
///
/// Only used to log dropped files that are unlikely to decode; the decoder
/// has the final word.
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_match_case_insensitively() {
        assert!(has_image_extension(Path::new("shirt.PNG")));
        assert!(has_image_extension(Path::new("/a/b/photo.jpeg")));
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("no_extension")));
    }
}
