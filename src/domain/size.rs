// SPDX-License-Identifier: MPL-2.0
//! Size recommendation.
//!
//! Two bands only: broad builds (athletic, big) get `XL` above 90 kg and `L`
//! otherwise; other builds get `L` above 80 kg and `M` otherwise. A weight
//! exactly on a threshold takes the lower size.

use super::build::Build;
use std::fmt;

/// Threshold above which broad builds move from `L` to `XL`.
pub const BROAD_BUILD_THRESHOLD_KG: u32 = 90;

/// Threshold above which other builds move from `M` to `L`.
pub const STANDARD_BUILD_THRESHOLD_KG: u32 = 80;

/// Recommended shirt size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    M,
    L,
    XL,
}

impl Size {
    /// Recommends a size from weight and build.
    #[must_use]
    pub fn recommend(weight_kg: u32, build: Build) -> Self {
        Self::for_inputs(Some(weight_kg), Some(build))
    }

    /// Recommends a size from possibly incomplete form input.
    ///
    /// An unknown weight is never "above" a threshold, and an unknown build
    /// uses the standard band.
    #[must_use]
    pub fn for_inputs(weight_kg: Option<u32>, build: Option<Build>) -> Self {
        let broad = build.is_some_and(Build::is_broad);
        let (threshold, upper, lower) = if broad {
            (BROAD_BUILD_THRESHOLD_KG, Size::XL, Size::L)
        } else {
            (STANDARD_BUILD_THRESHOLD_KG, Size::L, Size::M)
        };

        match weight_kg {
            Some(weight) if weight > threshold => upper,
            _ => lower,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broad_builds_use_xl_band() {
        for build in [Build::Athletic, Build::Big] {
            assert_eq!(Size::recommend(91, build), Size::XL);
            assert_eq!(Size::recommend(90, build), Size::L);
            assert_eq!(Size::recommend(30, build), Size::L);
            assert_eq!(Size::recommend(200, build), Size::XL);
        }
    }

    #[test]
    fn standard_builds_use_l_band() {
        for build in [Build::Lean, Build::Regular] {
            assert_eq!(Size::recommend(81, build), Size::L);
            assert_eq!(Size::recommend(80, build), Size::M);
            assert_eq!(Size::recommend(30, build), Size::M);
            assert_eq!(Size::recommend(200, build), Size::L);
        }
    }

    #[test]
    fn reference_examples() {
        assert_eq!(Size::recommend(95, Build::Big), Size::XL);
        assert_eq!(Size::recommend(70, Build::Lean), Size::M);
    }

    #[test]
    fn every_weight_matches_band_rule() {
        for weight in 0..=250 {
            for build in Build::ALL {
                let expected = match (build.is_broad(), weight) {
                    (true, w) if w > 90 => Size::XL,
                    (true, _) => Size::L,
                    (false, w) if w > 80 => Size::L,
                    (false, _) => Size::M,
                };
                assert_eq!(Size::recommend(weight, build), expected, "{weight} kg, {build:?}");
            }
        }
    }

    #[test]
    fn unknown_weight_takes_lower_size() {
        assert_eq!(Size::for_inputs(None, Some(Build::Big)), Size::L);
        assert_eq!(Size::for_inputs(None, Some(Build::Lean)), Size::M);
    }

    #[test]
    fn unknown_build_uses_standard_band() {
        assert_eq!(Size::for_inputs(Some(95), None), Size::L);
        assert_eq!(Size::for_inputs(Some(70), None), Size::M);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Size::XL.to_string(), "XL");
    }
}
