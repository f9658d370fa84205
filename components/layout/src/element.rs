//! Layout elements: the nodes of a layout tree.
//!
//! An [`Element`] describes how a view wants to be sized and placed before any
//! view exists. Configuration is a chain of by-value setters; the only
//! operation with side effects is [`Element::resolve`], which creates views and
//! installs constraints through a [`ConstraintBackend`].

use anchorage_core::{Axis, ConstraintBackend, ConstraintBuilder, EdgeInsets, Size, ViewId};

use crate::{
    alignment::{Alignment, AxisAlignment, HorizontalAlignment, VerticalAlignment},
    length::Length,
    stack::Stack,
};

/// Sizing and placement rules shared by every kind of element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Space kept free around the element, outside its box.
    pub margin: EdgeInsets,
    /// Inset of the region available to the element's children.
    pub padding: EdgeInsets,
    /// Requested width.
    pub width: Length,
    /// Requested height.
    pub height: Length,
    /// Alignment of the element, or of a stack's content along its axis.
    pub alignment: Alignment,
}

impl Style {
    /// Requested length along `axis`.
    #[must_use]
    pub const fn length(&self, axis: Axis) -> Length {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Alignment component along `axis`.
    #[must_use]
    pub fn alignment_along(&self, axis: Axis) -> AxisAlignment {
        self.alignment.along(axis)
    }
}

/// What an element lays out inside its own view.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// A single view with no children of its own.
    Leaf,
    /// Children stacked along one axis.
    Stack(Stack),
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Element {
    view: Option<ViewId>,
    style: Style,
    content: Content,
}

/// The outcome of resolving an [`Element`].
///
/// The requested sizes of the element are left untouched; the sizes actually
/// applied to its view, including those computed from children, live here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    /// The view the element was materialized into.
    pub view: ViewId,
    /// Width applied to `view`.
    pub width: Length,
    /// Height applied to `view`.
    pub height: Length,
}

impl Resolved {
    /// Applied length along `axis`.
    #[must_use]
    pub const fn length(&self, axis: Axis) -> Length {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub(crate) const fn set_length(&mut self, axis: Axis, length: Length) {
        match axis {
            Axis::Horizontal => self.width = length,
            Axis::Vertical => self.height = length,
        }
    }
}

impl Element {
    /// A leaf that creates a placeholder view when resolved.
    pub fn leaf() -> Self {
        Self {
            view: None,
            style: Style::default(),
            content: Content::Leaf,
        }
    }

    /// A leaf wrapping an existing view.
    pub fn view(view: ViewId) -> Self {
        Self::leaf().bind(view)
    }

    /// Binds the element to an existing view instead of a placeholder.
    pub fn bind(mut self, view: ViewId) -> Self {
        self.view = Some(view);
        self
    }

    /// Sets the margin.
    pub fn margin(mut self, margin: impl Into<EdgeInsets>) -> Self {
        self.style.margin = margin.into();
        self
    }

    /// Sets the padding.
    pub fn padding(mut self, padding: impl Into<EdgeInsets>) -> Self {
        self.style.padding = padding.into();
        self
    }

    /// Sets the width; `Length::Flexible` or `None` clears it.
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.style.width = width.into();
        self
    }

    /// Sets the height; `Length::Flexible` or `None` clears it.
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.style.height = height.into();
        self
    }

    /// Fixes both dimensions.
    pub fn size(self, size: Size) -> Self {
        self.width(size.width).height(size.height)
    }

    /// Sets the vertical alignment.
    pub fn valign(mut self, alignment: VerticalAlignment) -> Self {
        self.style.alignment = self.style.alignment.with_vertical(alignment);
        self
    }

    /// Sets the horizontal alignment.
    pub fn halign(mut self, alignment: HorizontalAlignment) -> Self {
        self.style.alignment = self.style.alignment.with_horizontal(alignment);
        self
    }

    /// Sets both alignments.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// The element's rules.
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// The view this element is bound to, if any.
    #[must_use]
    pub const fn bound_view(&self) -> Option<ViewId> {
        self.view
    }

    /// What the element lays out.
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Children of a stack; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.content {
            Content::Leaf => &[],
            Content::Stack(stack) => stack.children(),
        }
    }

    /// Materializes the element into a view positioned by constraints.
    ///
    /// Stacks resolve their children depth first and add them as subviews.
    /// The element itself is not modified, so resolving an element bound to a
    /// view again reinstalls the same constraints, which the backend updates
    /// in place.
    pub fn resolve(&self, backend: &mut dyn ConstraintBackend) -> Resolved {
        match &self.content {
            Content::Leaf => self.resolve_leaf(backend),
            Content::Stack(stack) => stack.resolve(self.view, &self.style, backend),
        }
    }

    fn resolve_leaf(&self, backend: &mut dyn ConstraintBackend) -> Resolved {
        let view = self.view.unwrap_or_else(|| backend.create_view());
        apply_size(view, &self.style, backend);
        tracing::trace!(%view, width = ?self.style.width, height = ?self.style.height, "resolved leaf");
        Resolved {
            view,
            width: self.style.width,
            height: self.style.height,
        }
    }
}

/// A placeholder leaf; shorthand for [`Element::leaf`].
pub fn leaf() -> Element {
    Element::leaf()
}

/// A leaf wrapping `view`; shorthand for [`Element::view`].
pub fn view(view: ViewId) -> Element {
    Element::view(view)
}

/// Installs the fixed dimensions of `style` on `view`.
///
/// # Panics
///
/// Panics if a fixed dimension is negative or not finite.
pub(crate) fn apply_size(view: ViewId, style: &Style, backend: &mut dyn ConstraintBackend) {
    if let Length::Fixed(width) = style.width.validated() {
        ConstraintBuilder::new(view).width(width).build(backend);
    }
    if let Length::Fixed(height) = style.height.validated() {
        ConstraintBuilder::new(view).height(height).build(backend);
    }
}

impl From<ViewId> for Element {
    fn from(view: ViewId) -> Self {
        Self::view(view)
    }
}

impl From<Stack> for Element {
    fn from(stack: Stack) -> Self {
        Self {
            view: None,
            style: Style::default(),
            content: Content::Stack(stack),
        }
    }
}
