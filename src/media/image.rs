// SPDX-License-Identifier: MPL-2.0
//! Loading the image printed on the shirt.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// An image picked by the user, decoded and ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    /// File name shown under the drop target.
    pub file_name: String,
    /// Size of the file on disk.
    pub byte_len: u64,
    pub width: u32,
    pub height: u32,
    pub handle: image::Handle,
}

impl SelectedImage {
    /// Builds an image from already-decoded RGBA pixels.
    #[must_use]
    pub fn from_rgba(
        file_name: impl Into<String>,
        byte_len: u64,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            byte_len,
            width,
            height,
            handle: image::Handle::from_rgba(width, height, pixels),
        }
    }

    /// Decodes encoded bytes (PNG, JPEG, ...) into an image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the bytes are not a decodable image.
    pub fn decode(file_name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes)?;
        let (width, height) = decoded.dimensions();
        let pixels = decoded.to_rgba8().into_vec();
        Ok(Self::from_rgba(
            file_name,
            bytes.len() as u64,
            width,
            height,
            pixels,
        ))
    }
}

/// Display name of a path: its final component, or the whole path.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads and decodes an image file without blocking the UI thread.
///
/// The file is read with tokio and decoded on the blocking pool. There is no
/// size limit beyond what the decoder accepts.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Image`] if the contents are not a decodable image
pub async fn load_image(path: impl AsRef<Path>) -> Result<SelectedImage> {
    let path = path.as_ref();
    let file_name = display_name(path);
    let bytes = tokio::fs::read(path).await?;

    tokio::task::spawn_blocking(move || SelectedImage::decode(file_name, &bytes))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("logo.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let selected = load_image(&image_path)
            .await
            .expect("png should load successfully");
        assert_eq!(selected.file_name, "logo.png");
        assert_eq!(selected.width, 4);
        assert_eq!(selected.height, 2);
        assert_eq!(
            selected.byte_len,
            fs::metadata(&image_path).expect("metadata").len()
        );
    }

    #[tokio::test]
    async fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path).await {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_garbage_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path).await {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn display_name_uses_last_component() {
        assert_eq!(display_name(Path::new("/tmp/shirts/front.jpg")), "front.jpg");
    }
}
