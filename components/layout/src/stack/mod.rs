//! Stacks: children laid out edge to edge along one axis.
//!
//! [`hstack`] and [`vstack`] are the entry points. Both build the same
//! [`Stack`]; the axis decides which dimension is the stacking axis and which
//! is the cross axis.
//!
//! # Sizing
//!
//! - A child with a fixed length on the stacking axis contributes its margins
//!   and length to the stack's extent. When every child is fixed, a stack
//!   without a requested length takes exactly that extent plus its padding.
//! - A child with a fixed cross-axis length is aligned by its own cross-axis
//!   alignment; a flexible one is stretched between the stack's padding edges.
//! - If any child is flexible on the stacking axis, the first and last children
//!   are pinned to the padding edges and the flexible children absorb the rest.
//!
//! # Example
//!
//! ```rust
//! use anchorage_core::Canvas;
//! use anchorage_layout::{Element, Length, stack::hstack};
//!
//! let mut canvas = Canvas::new();
//! let row = hstack([
//!     Element::leaf().width(10.0).height(8.0),
//!     Element::leaf().width(20.0).height(8.0),
//!     Element::leaf().width(30.0).height(8.0),
//! ]);
//!
//! let resolved = row.resolve(&mut canvas);
//! assert_eq!(resolved.width, Length::Fixed(60.0));
//! assert_eq!(resolved.height, Length::Fixed(8.0));
//! ```

mod engine;

use alloc::vec::Vec;

use anchorage_core::Axis;

use crate::element::Element;

/// Children arranged along a single axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    axis: Axis,
    children: Vec<Element>,
}

impl Stack {
    /// Creates a stack along `axis`.
    pub fn new<I>(axis: Axis, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        Self {
            axis,
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// The stacking axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Children in stacking order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }
}

/// Stacks `children` along `axis`.
pub fn stack<I>(axis: Axis, children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Element>,
{
    Stack::new(axis, children).into()
}

/// Stacks `children` left to right.
pub fn hstack<I>(children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Element>,
{
    stack(Axis::Horizontal, children)
}

/// Stacks `children` top to bottom.
pub fn vstack<I>(children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Element>,
{
    stack(Axis::Vertical, children)
}
