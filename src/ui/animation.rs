// SPDX-License-Identifier: MPL-2.0
//! Time-based animation curves for the overlays.
//!
//! Every function takes the time elapsed since the animation started and
//! returns a plain number, so views stay stateless and curves are testable.

use crate::config::{
    DOT_BOUNCE_HEIGHT, DOT_BOUNCE_PERIOD, DOT_STAGGER, POP_IN_DURATION, PULSE_PERIOD,
    SWAY_AMPLITUDE, SWAY_PERIOD,
};
use std::f32::consts::PI;
use std::time::Duration;

/// Number of dots under the loading heading.
pub const LOADING_DOT_COUNT: usize = 3;

/// Position within a repeating cycle, in `[0, 1)`.
#[must_use]
pub fn cycle_fraction(elapsed: Duration, period: Duration) -> f32 {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = (elapsed.as_millis() % period_ms) as f32 / period_ms as f32;
    fraction
}

/// Sinusoidal ease-in-out on `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (PI * t).cos()
}

/// Cubic ease-out on `[0, 1]`.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation through evenly spaced keyframes at `t` in `[0, 1]`.
#[must_use]
pub fn keyframes(values: &[f32], t: f32) -> f32 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segments = values.len() - 1;
            #[allow(clippy::cast_precision_loss)]
            let scaled = t.clamp(0.0, 1.0) * segments as f32;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = (scaled.floor() as usize).min(segments - 1);
            #[allow(clippy::cast_precision_loss)]
            let local = scaled - index as f32;
            values[index] + (values[index + 1] - values[index]) * local
        }
    }
}

/// Upward lift of a loading dot, in logical pixels.
///
/// Each dot rises to [`DOT_BOUNCE_HEIGHT`] and back once per period, starting
/// [`DOT_STAGGER`] after the previous one. A dot that has not started yet
/// stays on the baseline.
#[must_use]
pub fn dot_lift(elapsed: Duration, index: usize) -> f32 {
    let delay = DOT_STAGGER * u32::try_from(index).unwrap_or(u32::MAX);
    let Some(local) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    let fraction = cycle_fraction(local, DOT_BOUNCE_PERIOD);
    let triangle = 1.0 - (2.0 * fraction - 1.0).abs();
    DOT_BOUNCE_HEIGHT * ease_in_out(triangle)
}

/// Whether a loading dot is visible yet.
#[must_use]
pub fn dot_visible(elapsed: Duration, index: usize) -> bool {
    elapsed >= DOT_STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
}

/// Horizontal offset of the swaying shirt, in logical pixels.
///
/// Goes left, right, left and back to center once per [`SWAY_PERIOD`].
#[must_use]
pub fn sway_offset(elapsed: Duration) -> f32 {
    let t = cycle_fraction(elapsed, SWAY_PERIOD);
    keyframes(
        &[0.0, -SWAY_AMPLITUDE, SWAY_AMPLITUDE, -SWAY_AMPLITUDE, 0.0],
        t,
    )
}

/// Scale of the print on the swaying shirt, pulsing between 1.0 and 1.1.
#[must_use]
pub fn pulse_scale(elapsed: Duration) -> f32 {
    let t = cycle_fraction(elapsed, PULSE_PERIOD);
    keyframes(&[1.0, 1.1, 1.0], t)
}

/// Progress of the pop-in of overlay content, from 0.0 to 1.0.
#[must_use]
pub fn pop_in(elapsed: Duration) -> f32 {
    let total = POP_IN_DURATION.as_secs_f32();
    if total <= 0.0 {
        return 1.0;
    }
    ease_out(elapsed.as_secs_f32() / total)
}
