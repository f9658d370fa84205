//! Fluent construction of constraints.
//!
//! [`ConstraintBuilder`] collects the parameters of a single [`Constraint`]
//! and installs it through a [`ConstraintBackend`]. The edge helpers mirror the
//! phrasing of native layout code: `left_edges(child, 8.0, ..)` on a container
//! places the child's left edge 8 points inside the container.

use crate::{
    constraint::{Attribute, Constraint, ConstraintBackend, ConstraintId, Relation, ViewId},
    geometry::{Axis, Size},
};

/// Which edge of the owning view an edge helper anchors to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgeAnchor {
    /// The edge inset by the view's layout margins.
    #[default]
    Margin,
    /// The raw edge of the view.
    Bounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    From,
    To,
}

/// Builder for a single constraint installed on `owner`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use]
pub struct ConstraintBuilder {
    owner: ViewId,
    from: ViewId,
    from_attribute: Attribute,
    to: Option<ViewId>,
    to_attribute: Attribute,
    relation: Relation,
    multiplier: f32,
    constant: f32,
    editing: Side,
}

impl ConstraintBuilder {
    /// Starts a constraint installed on, and initially reading from, `owner`.
    pub const fn new(owner: ViewId) -> Self {
        Self {
            owner,
            from: owner,
            from_attribute: Attribute::NotAnAttribute,
            to: None,
            to_attribute: Attribute::NotAnAttribute,
            relation: Relation::Equal,
            multiplier: 1.0,
            constant: 0.0,
            editing: Side::From,
        }
    }

    /// Sets the left-hand view; following [`attribute`](Self::attribute) calls apply to it.
    pub const fn from(mut self, view: ViewId) -> Self {
        self.editing = Side::From;
        self.from = view;
        self
    }

    /// Sets the right-hand view; following [`attribute`](Self::attribute) calls apply to it.
    pub const fn to(mut self, view: ViewId) -> Self {
        self.editing = Side::To;
        self.to = Some(view);
        self
    }

    /// Sets the attribute of whichever side was selected last.
    pub const fn attribute(mut self, attribute: Attribute) -> Self {
        match self.editing {
            Side::From => self.from_attribute = attribute,
            Side::To => self.to_attribute = attribute,
        }
        self
    }

    /// Sets the relation.
    pub const fn relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    /// Sets the multiplier applied to the right-hand attribute.
    pub const fn multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the constant.
    pub const fn constant(mut self, constant: f32) -> Self {
        self.constant = constant;
        self
    }

    /// The view this constraint is installed on.
    #[must_use]
    pub const fn owner(&self) -> ViewId {
        self.owner
    }

    /// The constraint described so far.
    ///
    /// # Panics
    ///
    /// Panics if no left-hand attribute was chosen.
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        assert!(
            self.from_attribute != Attribute::NotAnAttribute,
            "constraint on {} has no left-hand attribute",
            self.owner
        );
        Constraint {
            from: self.from,
            from_attribute: self.from_attribute,
            relation: self.relation,
            to: self.to,
            to_attribute: self.to_attribute,
            multiplier: self.multiplier,
            constant: self.constant,
        }
    }

    /// Looks for an installed constraint with the same relation.
    #[must_use]
    pub fn find<B: ConstraintBackend + ?Sized>(&self, backend: &B) -> Option<ConstraintId> {
        backend.find(self.owner, &self.constraint())
    }

    /// Installs the constraint, updating an identical one in place.
    pub fn build<B: ConstraintBackend + ?Sized>(self, backend: &mut B) -> ConstraintId {
        backend.pin(self.owner, self.constraint())
    }

    /// Updates the constant of an installed match, if there is one.
    #[allow(clippy::float_cmp)]
    pub fn update<B: ConstraintBackend + ?Sized>(
        self,
        backend: &mut B,
        constant: f32,
    ) -> Option<ConstraintId> {
        let id = self.find(backend)?;
        if backend.constraints(self.owner)[id.index].constant != constant {
            backend.set_constant(id, constant);
            backend.layout_if_needed(self.owner);
        }
        Some(id)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Absolute width.
    pub const fn width(self, width: f32) -> Self {
        self.attribute(Attribute::Width).constant(width)
    }

    /// Absolute height.
    pub const fn height(self, height: f32) -> Self {
        self.attribute(Attribute::Height).constant(height)
    }

    /// Places `view`'s left edge `inner_spacing` inside this view's left edge.
    pub const fn left_edges(self, view: ViewId, inner_spacing: f32, anchor: EdgeAnchor) -> Self {
        let attribute = match anchor {
            EdgeAnchor::Margin => Attribute::LeftMargin,
            EdgeAnchor::Bounds => Attribute::Left,
        };
        self.attribute(attribute)
            .to(view)
            .attribute(Attribute::Left)
            .constant(-inner_spacing)
    }

    /// Places `view`'s right edge `inner_spacing` inside this view's right edge.
    pub const fn right_edges(self, view: ViewId, inner_spacing: f32, anchor: EdgeAnchor) -> Self {
        let attribute = match anchor {
            EdgeAnchor::Margin => Attribute::RightMargin,
            EdgeAnchor::Bounds => Attribute::Right,
        };
        self.attribute(attribute)
            .to(view)
            .attribute(Attribute::Right)
            .constant(inner_spacing)
    }

    /// Places `view`'s top edge `inner_spacing` inside this view's top edge.
    pub const fn top_edges(self, view: ViewId, inner_spacing: f32, anchor: EdgeAnchor) -> Self {
        let attribute = match anchor {
            EdgeAnchor::Margin => Attribute::TopMargin,
            EdgeAnchor::Bounds => Attribute::Top,
        };
        self.attribute(attribute)
            .to(view)
            .attribute(Attribute::Top)
            .constant(-inner_spacing)
    }

    /// Places `view`'s bottom edge `inner_spacing` inside this view's bottom edge.
    pub const fn bottom_edges(self, view: ViewId, inner_spacing: f32, anchor: EdgeAnchor) -> Self {
        let attribute = match anchor {
            EdgeAnchor::Margin => Attribute::BottomMargin,
            EdgeAnchor::Bounds => Attribute::Bottom,
        };
        self.attribute(attribute)
            .to(view)
            .attribute(Attribute::Bottom)
            .constant(inner_spacing)
    }

    /// Aligns the horizontal centers.
    pub const fn center_x(self, view: ViewId, offset: f32) -> Self {
        self.attribute(Attribute::CenterX)
            .to(view)
            .attribute(Attribute::CenterX)
            .constant(offset)
    }

    /// Aligns the vertical centers.
    pub const fn center_y(self, view: ViewId, offset: f32) -> Self {
        self.attribute(Attribute::CenterY)
            .to(view)
            .attribute(Attribute::CenterY)
            .constant(offset)
    }

    /// Relates this view's horizontal center to `view`'s left side.
    pub const fn right_of_center(self, view: ViewId, right_spacing: f32) -> Self {
        self.attribute(Attribute::CenterX)
            .to(view)
            .attribute(Attribute::Left)
            .constant(right_spacing)
    }

    /// Relates this view's horizontal center to `view`'s right side.
    pub const fn left_of_center(self, view: ViewId, left_spacing: f32) -> Self {
        self.attribute(Attribute::CenterX)
            .to(view)
            .attribute(Attribute::Right)
            .constant(-left_spacing)
    }

    /// Relates this view's vertical center to `view`'s bottom side.
    pub const fn above_center(self, view: ViewId, top_spacing: f32) -> Self {
        self.attribute(Attribute::CenterY)
            .to(view)
            .attribute(Attribute::Bottom)
            .constant(-top_spacing)
    }

    /// Relates this view's vertical center to `view`'s top side.
    pub const fn below_center(self, view: ViewId, bottom_spacing: f32) -> Self {
        self.attribute(Attribute::CenterY)
            .to(view)
            .attribute(Attribute::Top)
            .constant(bottom_spacing)
    }

    /// Places `right_view` `between_spacing` after `left_view`, side by side.
    pub const fn left_right(self, left_view: ViewId, right_view: ViewId, between_spacing: f32) -> Self {
        self.from(left_view)
            .attribute(Attribute::Right)
            .to(right_view)
            .attribute(Attribute::Left)
            .constant(-between_spacing)
    }

    /// Places `bottom_view` `between_spacing` below `top_view`.
    pub const fn top_bottom(self, top_view: ViewId, bottom_view: ViewId, between_spacing: f32) -> Self {
        self.from(top_view)
            .attribute(Attribute::Bottom)
            .to(bottom_view)
            .attribute(Attribute::Top)
            .constant(-between_spacing)
    }

    // ------------------------------------------------------------------
    // Axis-generic forms
    // ------------------------------------------------------------------

    /// Absolute extent along `axis`: [`width`](Self::width) or [`height`](Self::height).
    pub const fn extent(self, axis: Axis, value: f32) -> Self {
        self.attribute(axis.dimension()).constant(value)
    }

    /// [`left_edges`](Self::left_edges) or [`top_edges`](Self::top_edges), anchored to the margins.
    pub const fn leading_edges(self, axis: Axis, view: ViewId, inner_spacing: f32) -> Self {
        self.attribute(axis.leading_margin())
            .to(view)
            .attribute(axis.leading_edge())
            .constant(-inner_spacing)
    }

    /// [`right_edges`](Self::right_edges) or [`bottom_edges`](Self::bottom_edges), anchored to the margins.
    pub const fn trailing_edges(self, axis: Axis, view: ViewId, inner_spacing: f32) -> Self {
        self.attribute(axis.trailing_margin())
            .to(view)
            .attribute(axis.trailing_edge())
            .constant(inner_spacing)
    }

    /// [`center_x`](Self::center_x) or [`center_y`](Self::center_y).
    pub const fn centers(self, axis: Axis, view: ViewId, offset: f32) -> Self {
        self.attribute(axis.center())
            .to(view)
            .attribute(axis.center())
            .constant(offset)
    }

    /// [`left_right`](Self::left_right) or [`top_bottom`](Self::top_bottom).
    pub const fn adjacent(self, axis: Axis, before: ViewId, after: ViewId, spacing: f32) -> Self {
        self.from(before)
            .attribute(axis.trailing_edge())
            .to(after)
            .attribute(axis.leading_edge())
            .constant(-spacing)
    }
}

/// View-level shortcuts over [`ConstraintBuilder`].
///
/// Every method installs its constraints on `view` and relates `inner` to it.
pub trait Constrain: ConstraintBackend {
    /// Starts a constraint installed on `view`.
    fn constrain(&self, view: ViewId) -> ConstraintBuilder {
        ConstraintBuilder::new(view)
    }

    /// Fixes both dimensions of `view`.
    fn constrain_size(&mut self, view: ViewId, size: Size) {
        ConstraintBuilder::new(view).width(size.width).build(self);
        ConstraintBuilder::new(view).height(size.height).build(self);
    }

    /// Centers `inner` in `view`, offset by `offset_x`/`offset_y`.
    fn constrain_center(&mut self, view: ViewId, inner: ViewId, offset_x: f32, offset_y: f32) {
        ConstraintBuilder::new(view).center_x(inner, offset_x).build(self);
        ConstraintBuilder::new(view).center_y(inner, offset_y).build(self);
    }

    /// Pins `inner` to the left of `view`, centered vertically.
    fn constrain_left_center(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).left_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).center_y(inner, 0.0).build(self);
    }

    /// Pins `inner` to the right of `view`, centered vertically.
    fn constrain_right_center(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).right_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).center_y(inner, 0.0).build(self);
    }

    /// Pins `inner` to the top of `view`, centered horizontally.
    fn constrain_top_center(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).top_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).center_x(inner, 0.0).build(self);
    }

    /// Pins `inner` to the bottom of `view`, centered horizontally.
    fn constrain_bottom_center(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).bottom_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).center_x(inner, 0.0).build(self);
    }

    /// Pins `inner` to the top-left corner of `view`.
    fn constrain_top_left(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).left_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).top_edges(inner, inner_spacing, anchor).build(self);
    }

    /// Pins `inner` to the top-right corner of `view`.
    fn constrain_top_right(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).right_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).top_edges(inner, inner_spacing, anchor).build(self);
    }

    /// Pins `inner` to the bottom-left corner of `view`.
    fn constrain_bottom_left(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).left_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).bottom_edges(inner, inner_spacing, anchor).build(self);
    }

    /// Pins `inner` to the bottom-right corner of `view`.
    fn constrain_bottom_right(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).right_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).bottom_edges(inner, inner_spacing, anchor).build(self);
    }

    /// Pins all four edges of `inner` inside `view`.
    fn constrain_inside(&mut self, view: ViewId, inner: ViewId, inner_spacing: f32, anchor: EdgeAnchor) {
        ConstraintBuilder::new(view).top_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).bottom_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).left_edges(inner, inner_spacing, anchor).build(self);
        ConstraintBuilder::new(view).right_edges(inner, inner_spacing, anchor).build(self);
    }
}

impl<B: ConstraintBackend + ?Sized> Constrain for B {}
