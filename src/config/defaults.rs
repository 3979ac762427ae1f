// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **General**: Startup theme and log level
//! - **Overlays**: Loading and saved overlay durations
//! - **Animation**: Tick cadence and animation curves
//! - **Image**: Advisory upload limit

use std::time::Duration;

// ==========================================================================
// General Defaults
// ==========================================================================

/// Default log filter when neither the config nor `TEE_STUDIO_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// How long the loading overlay covers the form after startup.
pub const LOADING_OVERLAY_DURATION: Duration = Duration::from_millis(2000);

/// How long the saved confirmation stays over the form after a submission.
pub const SAVED_OVERLAY_DURATION: Duration = Duration::from_millis(3000);

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval of the tick subscription while an overlay or toast is active.
pub const ANIMATION_TICK: Duration = Duration::from_millis(33);

/// Period of one bounce of a loading dot.
pub const DOT_BOUNCE_PERIOD: Duration = Duration::from_millis(800);

/// Delay between consecutive loading dots.
pub const DOT_STAGGER: Duration = Duration::from_millis(200);

/// Height of a loading dot bounce, in logical pixels.
pub const DOT_BOUNCE_HEIGHT: f32 = 15.0;

/// Period of the sway of the shirt illustration in the saved overlay.
pub const SWAY_PERIOD: Duration = Duration::from_millis(2000);

/// Horizontal amplitude of the sway, in logical pixels.
pub const SWAY_AMPLITUDE: f32 = 10.0;

/// Duration of the pop-in animation of overlay content.
pub const POP_IN_DURATION: Duration = Duration::from_millis(300);

/// Period of the pulse of the print on the swaying shirt.
pub const PULSE_PERIOD: Duration = Duration::from_millis(1500);

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Upload size shown in the drop zone hint, in megabytes.
///
/// Purely informative: larger files are accepted.
pub const ADVISORY_MAX_IMAGE_MB: u32 = 10;

/// File extensions offered by the image picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(LOADING_OVERLAY_DURATION.as_millis() == 2000);
    assert!(SAVED_OVERLAY_DURATION.as_millis() == 3000);
    assert!(ANIMATION_TICK.as_millis() < DOT_STAGGER.as_millis());
    assert!(DOT_STAGGER.as_millis() < DOT_BOUNCE_PERIOD.as_millis());
    assert!(POP_IN_DURATION.as_millis() < SAVED_OVERLAY_DURATION.as_millis());
    assert!(DOT_BOUNCE_HEIGHT > 0.0);
    assert!(SWAY_AMPLITUDE > 0.0);
    assert!(PULSE_PERIOD.as_millis() > 0);
};
