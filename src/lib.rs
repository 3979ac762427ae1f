// SPDX-License-Identifier: MPL-2.0
//! `tee_studio` is a small t-shirt customizer built with the Iced GUI framework.
//!
//! It validates a measurements form, recommends a shirt size, previews an
//! uploaded artwork with custom text, and switches between three visual
//! themes. Translations use Fluent; settings come from a read-only TOML file.

#![doc(html_root_url = "https://docs.rs/tee_studio/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;
