// SPDX-License-Identifier: MPL-2.0
//! Overlay phases.
//!
//! Timed phases store the instant they started; the app's tick checks them
//! against the fixed durations. Time is always passed in so transitions can
//! be tested without sleeping.

use crate::config::{LOADING_OVERLAY_DURATION, SAVED_OVERLAY_DURATION};
use std::time::{Duration, Instant};

/// What the window is showing on top of (or instead of) the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    /// Boot preloader; the form is not rendered.
    Loading { since: Instant },
    /// Normal interaction.
    Editing,
    /// Confirmation modal after a valid submission.
    Saved { since: Instant },
}

impl UiPhase {
    /// Initial phase at application boot.
    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        UiPhase::Loading { since: now }
    }

    /// Returns to `Editing` once the current timed phase has run its course.
    ///
    /// Returns `true` if the phase changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let expired = match *self {
            UiPhase::Loading { since } => elapsed(since, now) >= LOADING_OVERLAY_DURATION,
            UiPhase::Saved { since } => elapsed(since, now) >= SAVED_OVERLAY_DURATION,
            UiPhase::Editing => false,
        };
        if expired {
            *self = UiPhase::Editing;
        }
        expired
    }

    /// Enters `Saved`; only allowed from `Editing`.
    ///
    /// Returns `true` if the phase changed.
    pub fn mark_saved(&mut self, now: Instant) -> bool {
        if *self == UiPhase::Editing {
            *self = UiPhase::Saved { since: now };
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, UiPhase::Loading { .. })
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, UiPhase::Saved { .. })
    }

    /// Form input and drops are only accepted while editing.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        *self == UiPhase::Editing
    }

    /// Whether a tick is needed to end the phase.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        !self.accepts_input()
    }

    /// Time spent in the current timed phase, zero while editing.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        match *self {
            UiPhase::Loading { since } | UiPhase::Saved { since } => elapsed(since, now),
            UiPhase::Editing => Duration::ZERO,
        }
    }
}

fn elapsed(since: Instant, now: Instant) -> Duration {
    now.saturating_duration_since(since)
}
