//! Alignment vocabulary consumed by the stack engine.

use anchorage_core::Axis;

/// Vertical placement of an element within the space it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Align to the top edge.
    #[default]
    Top,
    /// Center vertically.
    Center,
    /// Align to the bottom edge.
    Bottom,
}

/// Horizontal placement of an element within the space it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center horizontally.
    Center,
    /// Align to the right edge.
    Right,
}

/// Axis-neutral alignment: `Leading` is left or top, `Trailing` right or bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisAlignment {
    /// Towards the start of the axis.
    #[default]
    Leading,
    /// Centered on the axis.
    Center,
    /// Towards the end of the axis.
    Trailing,
}

impl From<VerticalAlignment> for AxisAlignment {
    fn from(value: VerticalAlignment) -> Self {
        match value {
            VerticalAlignment::Top => Self::Leading,
            VerticalAlignment::Center => Self::Center,
            VerticalAlignment::Bottom => Self::Trailing,
        }
    }
}

impl From<HorizontalAlignment> for AxisAlignment {
    fn from(value: HorizontalAlignment) -> Self {
        match value {
            HorizontalAlignment::Left => Self::Leading,
            HorizontalAlignment::Center => Self::Center,
            HorizontalAlignment::Right => Self::Trailing,
        }
    }
}

/// A horizontal and a vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
}

impl Alignment {
    /// Top-left, the default.
    pub const TOP_LEFT: Self = Self::new(HorizontalAlignment::Left, VerticalAlignment::Top);
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    /// Bottom-right.
    pub const BOTTOM_RIGHT: Self = Self::new(HorizontalAlignment::Right, VerticalAlignment::Bottom);

    /// Creates an alignment from its two components.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Replaces the horizontal component.
    #[must_use]
    pub const fn with_horizontal(mut self, horizontal: HorizontalAlignment) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Replaces the vertical component.
    #[must_use]
    pub const fn with_vertical(mut self, vertical: VerticalAlignment) -> Self {
        self.vertical = vertical;
        self
    }

    /// The horizontal component.
    #[must_use]
    pub const fn horizontal(&self) -> HorizontalAlignment {
        self.horizontal
    }

    /// The vertical component.
    #[must_use]
    pub const fn vertical(&self) -> VerticalAlignment {
        self.vertical
    }

    /// The component that applies along `axis`.
    #[must_use]
    pub fn along(&self, axis: Axis) -> AxisAlignment {
        match axis {
            Axis::Horizontal => self.horizontal.into(),
            Axis::Vertical => self.vertical.into(),
        }
    }
}
