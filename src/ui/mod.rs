// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! application owns component state, routes messages into it and reacts to
//! the effects it returns.
//!
//! # Screens
//!
//! - [`customizer`] - The customization form and its live preview
//! - [`overlays`] - Loading screen and saved confirmation
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Canvas drawings (shirt, loading dots)
//! - [`animation`] - Time-based curves driving the overlay animations
//! - [`styles`] - Centralized styling (buttons, containers, inputs, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - The three visual themes and their tokens
//! - [`notifications`] - Toast notification system for user feedback

pub mod animation;
pub mod customizer;
pub mod design_tokens;
pub mod notifications;
pub mod overlays;
pub mod styles;
pub mod theme;
pub mod widgets;
