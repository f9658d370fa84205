//! The constraint vocabulary and the backend contract.
//!
//! A [`Constraint`] reads the way native auto-layout reads:
//!
//! ```text
//! from.from_attribute  <relation>  to.to_attribute * multiplier + constant
//! ```
//!
//! When `to` is absent the right-hand side is just `constant`, which is how
//! absolute sizes are expressed.

use core::fmt;

use crate::geometry::{Axis, EdgeInsets};

/// Opaque identity of a view owned by a [`ConstraintBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(u32);

impl ViewId {
    /// Wraps a raw backend handle.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw backend handle.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// An edge, center, or dimension of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge inset by the view's layout margins.
    LeftMargin,
    /// Right edge inset by the view's layout margins.
    RightMargin,
    /// Top edge inset by the view's layout margins.
    TopMargin,
    /// Bottom edge inset by the view's layout margins.
    BottomMargin,
    /// Horizontal center.
    CenterX,
    /// Vertical center.
    CenterY,
    /// Width.
    Width,
    /// Height.
    Height,
    /// Placeholder for the missing side of an absolute constraint.
    #[default]
    NotAnAttribute,
}

/// Which part of a span along one axis an attribute refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    Start,
    End,
    Center,
    Extent,
}

impl Attribute {
    /// The axis this attribute measures, or `None` for [`Attribute::NotAnAttribute`].
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::Left
            | Self::Right
            | Self::LeftMargin
            | Self::RightMargin
            | Self::CenterX
            | Self::Width => Some(Axis::Horizontal),
            Self::Top
            | Self::Bottom
            | Self::TopMargin
            | Self::BottomMargin
            | Self::CenterY
            | Self::Height => Some(Axis::Vertical),
            Self::NotAnAttribute => None,
        }
    }

    pub(crate) const fn anchor(self) -> Option<Anchor> {
        match self {
            Self::Left | Self::Top | Self::LeftMargin | Self::TopMargin => Some(Anchor::Start),
            Self::Right | Self::Bottom | Self::RightMargin | Self::BottomMargin => {
                Some(Anchor::End)
            }
            Self::CenterX | Self::CenterY => Some(Anchor::Center),
            Self::Width | Self::Height => Some(Anchor::Extent),
            Self::NotAnAttribute => None,
        }
    }

    /// Offset between the raw edge and this attribute given the owning view's
    /// layout margins.
    pub(crate) const fn margin_offset(self, margins: &EdgeInsets) -> f32 {
        match self {
            Self::LeftMargin => margins.left,
            Self::TopMargin => margins.top,
            Self::RightMargin => -margins.right,
            Self::BottomMargin => -margins.bottom,
            _ => 0.0,
        }
    }
}

impl Axis {
    /// Leading edge along this axis (`Left` or `Top`).
    #[must_use]
    pub const fn leading_edge(self) -> Attribute {
        match self {
            Self::Horizontal => Attribute::Left,
            Self::Vertical => Attribute::Top,
        }
    }

    /// Trailing edge along this axis (`Right` or `Bottom`).
    #[must_use]
    pub const fn trailing_edge(self) -> Attribute {
        match self {
            Self::Horizontal => Attribute::Right,
            Self::Vertical => Attribute::Bottom,
        }
    }

    /// Leading edge inset by layout margins.
    #[must_use]
    pub const fn leading_margin(self) -> Attribute {
        match self {
            Self::Horizontal => Attribute::LeftMargin,
            Self::Vertical => Attribute::TopMargin,
        }
    }

    /// Trailing edge inset by layout margins.
    #[must_use]
    pub const fn trailing_margin(self) -> Attribute {
        match self {
            Self::Horizontal => Attribute::RightMargin,
            Self::Vertical => Attribute::BottomMargin,
        }
    }

    /// Center along this axis.
    #[must_use]
    pub const fn center(self) -> Attribute {
        match self {
            Self::Horizontal => Attribute::CenterX,
            Self::Vertical => Attribute::CenterY,
        }
    }

    /// Dimension along this axis (`Width` or `Height`).
    #[must_use]
    pub const fn dimension(self) -> Attribute {
        match self {
            Self::Horizontal => Attribute::Width,
            Self::Vertical => Attribute::Height,
        }
    }
}

/// Relation between the two sides of a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// `lhs == rhs`
    #[default]
    Equal,
    /// `lhs <= rhs`
    LessThanOrEqual,
    /// `lhs >= rhs`
    GreaterThanOrEqual,
}

/// A single linear relation between two view attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// View on the left-hand side.
    pub from: ViewId,
    /// Attribute of `from`.
    pub from_attribute: Attribute,
    /// Relation between both sides.
    pub relation: Relation,
    /// View on the right-hand side, `None` for absolute constraints.
    pub to: Option<ViewId>,
    /// Attribute of `to`.
    pub to_attribute: Attribute,
    /// Scale applied to the right-hand attribute.
    pub multiplier: f32,
    /// Offset added to the right-hand side.
    pub constant: f32,
}

impl Constraint {
    /// Whether `other` describes the same relation, ignoring the constant.
    ///
    /// This is the identity used to update constraints in place instead of
    /// stacking duplicates on repeated layout passes.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_relation(&self, other: &Self) -> bool {
        self.from == other.from
            && self.from_attribute == other.from_attribute
            && self.to == other.to
            && self.to_attribute == other.to_attribute
            && self.relation == other.relation
            && self.multiplier == other.multiplier
    }
}

/// Handle to a constraint stored by a backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintId {
    /// View the constraint was installed on.
    pub owner: ViewId,
    /// Position within the owner's constraint list.
    pub index: usize,
}

/// The host view system the layout engine talks to.
///
/// Implementations own view identity and the per-view constraint lists. The
/// layout engine only ever goes through [`pin`](Self::pin), which creates a
/// constraint or updates an identical one in place.
pub trait ConstraintBackend {
    /// Creates a fresh placeholder view.
    fn create_view(&mut self) -> ViewId;

    /// Adds `child` as a subview of `parent`, detaching it from any previous
    /// parent.
    fn add_subview(&mut self, parent: ViewId, child: ViewId);

    /// Sets the layout margins that margin attributes of `view` refer to.
    fn set_layout_margins(&mut self, view: ViewId, margins: EdgeInsets);

    /// Constraints installed on `owner`, in installation order.
    fn constraints(&self, owner: ViewId) -> &[Constraint];

    /// Appends a constraint to `owner` without looking for duplicates.
    fn add_constraint(&mut self, owner: ViewId, constraint: Constraint) -> ConstraintId;

    /// Replaces the constant of an installed constraint.
    fn set_constant(&mut self, id: ConstraintId, constant: f32);

    /// Requests a layout pass for `view` after its constraints changed.
    fn layout_if_needed(&mut self, view: ViewId);

    /// Looks up a constraint on `owner` with the same relation as `constraint`.
    fn find(&self, owner: ViewId, constraint: &Constraint) -> Option<ConstraintId> {
        self.constraints(owner)
            .iter()
            .position(|existing| existing.same_relation(constraint))
            .map(|index| ConstraintId { owner, index })
    }

    /// Installs `constraint` on `owner`, updating a matching one in place.
    #[allow(clippy::float_cmp)]
    fn pin(&mut self, owner: ViewId, constraint: Constraint) -> ConstraintId {
        let Some(id) = self.find(owner, &constraint) else {
            return self.add_constraint(owner, constraint);
        };

        let current = self.constraints(owner)[id.index].constant;
        if current != constraint.constant {
            tracing::trace!(%owner, from = current, to = constraint.constant, "updating constraint constant");
            self.set_constant(id, constraint.constant);
            self.layout_if_needed(owner);
        }
        id
    }
}
