// SPDX-License-Identifier: MPL-2.0
//! Measurement newtypes.
//!
//! Unlike clamped UI values, measurements typed by the user are never
//! silently corrected: out-of-range input is rejected so the form can
//! report it next to the field.

// =============================================================================
// Height Bounds
// =============================================================================

/// Height bounds in centimetres (100 to 250).
pub mod height_bounds {
    /// Minimum accepted height.
    pub const MIN_CM: u32 = 100;
    /// Maximum accepted height.
    pub const MAX_CM: u32 = 250;
    /// Value pre-filled in a fresh form.
    pub const DEFAULT_CM: u32 = 180;
}

// =============================================================================
// Weight Bounds
// =============================================================================

/// Weight bounds in kilograms (30 to 200).
pub mod weight_bounds {
    /// Minimum accepted weight.
    pub const MIN_KG: u32 = 30;
    /// Maximum accepted weight.
    pub const MAX_KG: u32 = 200;
    /// Value pre-filled in a fresh form.
    pub const DEFAULT_KG: u32 = 80;
}

// =============================================================================
// Custom Text Limits
// =============================================================================

/// Limits for the text printed on the shirt.
pub mod text_limits {
    /// Maximum number of characters (Unicode scalar values, newlines included).
    pub const MAX_CHARS: usize = 100;
    /// Maximum number of newline-delimited lines.
    pub const MAX_LINES: usize = 3;
}

/// Parses a whole, non-negative number typed in a numeric field.
///
/// Surrounding whitespace is ignored; anything else (empty input, signs,
/// decimals, letters) yields `None`.
#[must_use]
pub fn parse_whole_number(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

// =============================================================================
// HeightCm
// =============================================================================

/// Body height in centimetres, guaranteed to be within 100–250.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeightCm(u32);

impl HeightCm {
    /// Accepts the value only if it lies within the bounds (inclusive).
    #[must_use]
    pub fn new(cm: u32) -> Option<Self> {
        (height_bounds::MIN_CM..=height_bounds::MAX_CM)
            .contains(&cm)
            .then_some(Self(cm))
    }

    /// Parses raw field input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        parse_whole_number(input).and_then(Self::new)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for HeightCm {
    fn default() -> Self {
        Self(height_bounds::DEFAULT_CM)
    }
}

// =============================================================================
// WeightKg
// =============================================================================

/// Body weight in kilograms, guaranteed to be within 30–200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeightKg(u32);

impl WeightKg {
    /// Accepts the value only if it lies within the bounds (inclusive).
    #[must_use]
    pub fn new(kg: u32) -> Option<Self> {
        (weight_bounds::MIN_KG..=weight_bounds::MAX_KG)
            .contains(&kg)
            .then_some(Self(kg))
    }

    /// Parses raw field input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        parse_whole_number(input).and_then(Self::new)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for WeightKg {
    fn default() -> Self {
        Self(weight_bounds::DEFAULT_KG)
    }
}

// =============================================================================
// Compile-time Validation
// =============================================================================

const _: () = {
    assert!(height_bounds::MIN_CM < height_bounds::MAX_CM);
    assert!(height_bounds::DEFAULT_CM >= height_bounds::MIN_CM);
    assert!(height_bounds::DEFAULT_CM <= height_bounds::MAX_CM);
    assert!(weight_bounds::MIN_KG < weight_bounds::MAX_KG);
    assert!(weight_bounds::DEFAULT_KG >= weight_bounds::MIN_KG);
    assert!(weight_bounds::DEFAULT_KG <= weight_bounds::MAX_KG);
    assert!(text_limits::MAX_LINES > 0);
};
