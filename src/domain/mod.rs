// SPDX-License-Identifier: MPL-2.0
//! Domain layer - form rules and the overlay phase model.
//!
//! Nothing here depends on widget code: every rule can be exercised with
//! plain values and explicit instants.
//!
//! # Modules
//!
//! - [`measurements`]: Value bounds and validated newtypes ([`HeightCm`](measurements::HeightCm),
//!   [`WeightKg`](measurements::WeightKg))
//! - [`build`]: Body-type categories ([`Build`](build::Build))
//! - [`size`]: Size recommendation ([`Size`](size::Size))
//! - [`form`]: Editable form state and its defaults ([`FormState`](form::FormState))
//! - [`validation`]: Field rules and the validated [`Customization`](validation::Customization)
//! - [`phase`]: Loading / editing / saved overlay phases ([`UiPhase`](phase::UiPhase))

pub mod build;
pub mod form;
pub mod measurements;
pub mod phase;
pub mod size;
pub mod validation;

pub use build::Build;
pub use form::FormState;
pub use phase::UiPhase;
pub use size::Size;
pub use validation::{Customization, Field, FieldError, FieldErrors};
