//! Fixed versus flexible element dimensions.

/// Size of an element along one axis.
///
/// `Flexible` is not zero: the dimension is left to the constraints around the
/// element and stretches to whatever space they leave.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    /// An author-specified length in points.
    Fixed(f32),
    /// Determined by the surrounding constraints.
    #[default]
    Flexible,
}

impl Length {
    /// A fixed length.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative, NaN, or infinite.
    #[must_use]
    pub fn fixed(value: f32) -> Self {
        Self::Fixed(value).validated()
    }

    /// Returns `self` after checking that a fixed value is usable.
    ///
    /// `Fixed` is a public variant, so lengths built without
    /// [`fixed`](Self::fixed) are checked again before they reach a backend.
    pub(crate) fn validated(self) -> Self {
        if let Self::Fixed(value) = self {
            assert!(
                value.is_finite() && value >= 0.0,
                "fixed lengths must be finite and non-negative, got {value}"
            );
        }
        self
    }

    /// The fixed value, if any.
    #[must_use]
    pub const fn value(self) -> Option<f32> {
        match self {
            Self::Fixed(value) => Some(value),
            Self::Flexible => None,
        }
    }

    /// Whether this length is fixed.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Whether this length is flexible.
    #[must_use]
    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::Flexible)
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Self::fixed(value)
    }
}

impl From<Option<f32>> for Length {
    fn from(value: Option<f32>) -> Self {
        value.map_or(Self::Flexible, Self::fixed)
    }
}
