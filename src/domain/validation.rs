// SPDX-License-Identifier: MPL-2.0
//! Field rules applied on submission.
//!
//! Each field reports at most one error: the first rule it fails. For the
//! custom text the length rule is checked before the line rule.

use super::build::Build;
use super::form::FormState;
use super::measurements::{parse_whole_number, text_limits, HeightCm, WeightKg};
use super::size::Size;

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Height,
    Weight,
    Build,
    CustomText,
}

/// A rule violation attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    HeightRequired,
    HeightOutOfRange,
    WeightRequired,
    WeightOutOfRange,
    BuildMissing,
    TextTooLong,
    TooManyLines,
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            FieldError::HeightRequired | FieldError::HeightOutOfRange => Field::Height,
            FieldError::WeightRequired | FieldError::WeightOutOfRange => Field::Weight,
            FieldError::BuildMissing => Field::Build,
            FieldError::TextTooLong | FieldError::TooManyLines => Field::CustomText,
        }
    }

    /// Returns the i18n key of the inline message.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::HeightRequired => "error-height-required",
            FieldError::HeightOutOfRange => "error-height-range",
            FieldError::WeightRequired => "error-weight-required",
            FieldError::WeightOutOfRange => "error-weight-range",
            FieldError::BuildMissing => "error-build-required",
            FieldError::TextTooLong => "error-text-too-long",
            FieldError::TooManyLines => "error-text-too-many-lines",
        }
    }
}

/// Errors found by one validation pass, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, error: FieldError) {
        if self.get(error.field()).is_none() {
            self.errors.push(error);
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().copied()
    }
}

/// Validated snapshot of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customization {
    pub height_cm: u32,
    pub weight_kg: u32,
    pub build: Build,
    pub custom_text: String,
    pub image_name: Option<String>,
    pub recommended_size: Size,
}

fn check_height(raw: &str) -> Result<HeightCm, FieldError> {
    match parse_whole_number(raw) {
        None if raw.trim().is_empty() => Err(FieldError::HeightRequired),
        None => Err(FieldError::HeightOutOfRange),
        Some(cm) => HeightCm::new(cm).ok_or(FieldError::HeightOutOfRange),
    }
}

fn check_weight(raw: &str) -> Result<WeightKg, FieldError> {
    match parse_whole_number(raw) {
        None if raw.trim().is_empty() => Err(FieldError::WeightRequired),
        None => Err(FieldError::WeightOutOfRange),
        Some(kg) => WeightKg::new(kg).ok_or(FieldError::WeightOutOfRange),
    }
}

fn check_text(text: &str) -> Result<(), FieldError> {
    if text.chars().count() > text_limits::MAX_CHARS {
        return Err(FieldError::TextTooLong);
    }
    if text.split('\n').count() > text_limits::MAX_LINES {
        return Err(FieldError::TooManyLines);
    }
    Ok(())
}

/// Checks every field and builds the customization when all pass.
///
/// # Errors
///
/// Returns every field that failed, one error per field.
pub fn validate(form: &FormState) -> Result<Customization, FieldErrors> {
    let mut errors = FieldErrors::default();

    let height = check_height(&form.height).map_err(|e| errors.push(e)).ok();
    let weight = check_weight(&form.weight).map_err(|e| errors.push(e)).ok();
    let build = form.build;
    if build.is_none() {
        errors.push(FieldError::BuildMissing);
    }
    if let Err(e) = check_text(&form.custom_text) {
        errors.push(e);
    }

    match (height, weight, build) {
        (Some(height), Some(weight), Some(build)) if errors.is_empty() => Ok(Customization {
            height_cm: height.value(),
            weight_kg: weight.value(),
            build,
            custom_text: form.custom_text.clone(),
            image_name: form.image_name().map(str::to_owned),
            recommended_size: Size::recommend(weight.value(), build),
        }),
        _ => Err(errors),
    }
}
