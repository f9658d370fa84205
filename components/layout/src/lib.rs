#![no_std]
//! Declarative stack layouts for `Anchorage`.
//!
//! This crate turns a tree of [`Element`]s into views and auto-layout
//! constraints. It contains:
//!
//! - the alignment vocabulary ([`VerticalAlignment`], [`HorizontalAlignment`]),
//! - [`Length`], which tells fixed dimensions apart from flexible ones,
//! - [`Element`], the node type with its fluent configuration surface,
//! - the [`stack`] engine with its [`hstack`] and [`vstack`] entry points.
//!
//! Views and constraints are created through a
//! [`ConstraintBackend`](anchorage_core::ConstraintBackend); nothing here
//! computes frames. Use a native backend, or
//! [`Canvas`](anchorage_core::Canvas) to solve the result in memory.
//!
//! # Logical Points
//!
//! Margins, padding, and lengths are all in logical points, the unit native
//! auto-layout uses. Centering offsets are rounded half away from zero so odd
//! slack lands on whole points.
//!
//! # Example
//!
//! ```rust
//! use anchorage_core::{Canvas, Rect, Size};
//! use anchorage_layout::{Element, HorizontalAlignment, hstack, vstack};
//!
//! let mut canvas = Canvas::new();
//! let toolbar = hstack([
//!     Element::leaf().width(44.0).height(44.0),
//!     Element::leaf().height(44.0).margin(8.0),
//!     Element::leaf().width(44.0).height(44.0),
//! ])
//! .width(320.0);
//! let screen = vstack([toolbar, Element::leaf()])
//!     .width(320.0)
//!     .height(480.0)
//!     .halign(HorizontalAlignment::Center);
//!
//! let root = screen.resolve(&mut canvas).view;
//! let frames = canvas.solve(root, Rect::from_size(Size::new(320.0, 480.0))).unwrap();
//! assert_eq!(frames.len(), 6);
//! ```

extern crate alloc;

pub mod alignment;
pub mod element;
pub mod length;
pub mod stack;

pub use alignment::{Alignment, AxisAlignment, HorizontalAlignment, VerticalAlignment};
pub use element::{Content, Element, Resolved, Style, leaf, view};
pub use length::Length;
pub use stack::{Stack, hstack, vstack};
