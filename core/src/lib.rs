//! Core vocabulary for `Anchorage`.
//!
//! This crate defines everything the layout engine shares with the host view
//! system:
//!
//! - [`geometry`]: points, sizes, rectangles, edge insets, and the [`Axis`],
//! - [`constraint`]: view identity, attributes, relations, and the
//!   [`ConstraintBackend`] contract,
//! - [`builder`]: the fluent [`ConstraintBuilder`] and the [`Constrain`]
//!   shortcuts,
//! - [`canvas`]: a headless backend whose constraints can be
//!   [solved](Canvas::solve) into frames without a native platform.
//!
//! # Example
//!
//! ```rust
//! use anchorage_core::{Canvas, Constrain, ConstraintBackend, EdgeAnchor, Rect, Size};
//!
//! let mut canvas = Canvas::new();
//! let root = canvas.create_view();
//! let badge = canvas.create_view();
//! canvas.add_subview(root, badge);
//! canvas.constrain_size(badge, Size::new(24.0, 24.0));
//! canvas.constrain_top_right(root, badge, 8.0, EdgeAnchor::Bounds);
//!
//! let frames = canvas.solve(root, Rect::from_size(Size::new(320.0, 200.0))).unwrap();
//! assert_eq!(frames.frame(badge).unwrap().x(), 288.0);
//! ```

pub mod builder;
pub mod canvas;
pub mod constraint;
pub mod geometry;
pub mod solve;

pub use builder::{Constrain, ConstraintBuilder, EdgeAnchor};
pub use canvas::Canvas;
pub use constraint::{Attribute, Constraint, ConstraintBackend, ConstraintId, Relation, ViewId};
pub use geometry::{Axis, EdgeInsets, Point, Rect, Size};
pub use solve::{Frames, SolveError};
