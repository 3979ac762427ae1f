// SPDX-License-Identifier: MPL-2.0
pub mod loading_dots;
pub mod shirt;

pub use loading_dots::LoadingDots;
pub use shirt::Shirt;
