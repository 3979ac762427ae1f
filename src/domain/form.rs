// SPDX-License-Identifier: MPL-2.0
//! Editable form state.

use super::build::Build;
use super::measurements::{height_bounds, parse_whole_number, weight_bounds};
use super::size::Size;
use crate::media::SelectedImage;

/// Raw values of the customization form, as typed by the user.
///
/// Numeric fields keep the raw text so partially typed input survives
/// re-rendering; they are only interpreted by validation and the size
/// recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub height: String,
    pub weight: String,
    pub build: Option<Build>,
    pub custom_text: String,
    pub selected_image: Option<SelectedImage>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            height: height_bounds::DEFAULT_CM.to_string(),
            weight: weight_bounds::DEFAULT_KG.to_string(),
            build: Some(Build::default()),
            custom_text: String::new(),
            selected_image: None,
        }
    }
}

impl FormState {
    /// Restores every field, the selected image included, to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Size recommended for the current input, valid or not.
    #[must_use]
    pub fn recommended_size(&self) -> Size {
        Size::for_inputs(parse_whole_number(&self.weight), self.build)
    }

    #[must_use]
    pub fn image_name(&self) -> Option<&str> {
        self.selected_image.as_ref().map(|image| image.file_name.as_str())
    }

    /// Whether the custom text has anything worth drawing on the preview.
    #[must_use]
    pub fn has_custom_text(&self) -> bool {
        !self.custom_text.trim().is_empty()
    }
}
