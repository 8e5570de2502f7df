//! The generator versions this crate reproduces.

/// A tracked generator version. Ordered so `>=`/`<` comparisons gate
/// version-specific behavior (e.g. Ancient City only exists from
/// [`McVersion::V1_19_2`] onward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum McVersion {
    V1_18,
    V1_19_2,
    V1_19_4,
    V1_20_6,
    V1_21_1,
    V1_21_3,
    V1_21Wd,
}

impl McVersion {
    /// The newest tracked version; used as the default when a caller
    /// doesn't pin one.
    pub const NEWEST: Self = Self::V1_21Wd;

    #[must_use]
    pub fn is_at_least(self, other: Self) -> bool {
        self >= other
    }
}

/// A generator dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Nether,
    Overworld,
    End,
}
