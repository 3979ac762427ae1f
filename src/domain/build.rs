// SPDX-License-Identifier: MPL-2.0
//! Body-type categories offered in the build selector.

/// Body type used by the size recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Build {
    Lean,
    Regular,
    #[default]
    Athletic,
    Big,
}

impl Build {
    /// All builds, in selector order.
    pub const ALL: [Build; 4] = [Build::Lean, Build::Regular, Build::Athletic, Build::Big];

    /// Athletic and big builds use the larger size band.
    #[must_use]
    pub fn is_broad(self) -> bool {
        matches!(self, Build::Athletic | Build::Big)
    }

    /// Returns the i18n key of the selector label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Build::Lean => "build-lean",
            Build::Regular => "build-regular",
            Build::Athletic => "build-athletic",
            Build::Big => "build-big",
        }
    }

    /// Stable lowercase identifier, used in log events.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Build::Lean => "lean",
            Build::Regular => "regular",
            Build::Athletic => "athletic",
            Build::Big => "big",
        }
    }
}
