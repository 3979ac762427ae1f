// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.
//!
//! Every style takes the active [`ThemeTokens`](crate::ui::theme::ThemeTokens)
//! so switching themes only swaps the tokens passed in.

pub mod button;
pub mod container;
pub mod input;
pub mod overlay;
