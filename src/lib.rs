#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod debug;

#[cfg(test)]
mod tests;

pub use anchorage_core::{
    Attribute, Axis, Canvas, Constrain, Constraint, ConstraintBackend, ConstraintBuilder,
    ConstraintId, EdgeAnchor, EdgeInsets, Frames, Point, Rect, Relation, Size, SolveError, ViewId,
};
pub use anchorage_layout::{
    Alignment, AxisAlignment, Element, HorizontalAlignment, Length, Resolved, Stack, Style,
    VerticalAlignment, hstack, leaf, view, vstack,
};

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! # Example
    //!
    //! ```rust
    //! use anchorage::prelude::*;
    //!
    //! let mut canvas = Canvas::new();
    //! let row = hstack([Element::leaf().width(10.0).height(10.0)]).resolve(&mut canvas);
    //! assert_eq!(row.width, Length::Fixed(10.0));
    //! ```
    pub use anchorage_core::{
        Canvas, Constrain, ConstraintBackend, ConstraintBuilder, EdgeAnchor, EdgeInsets, Rect,
        Size, ViewId,
    };
    pub use anchorage_layout::{
        Alignment, Element, HorizontalAlignment, Length, VerticalAlignment, hstack, leaf, view,
        vstack,
    };
}
