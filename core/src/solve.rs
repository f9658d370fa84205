//! Turning installed constraints into frames.
//!
//! The solver handles the constraint shapes layout code produces: equalities
//! between single attributes. Each view has one span per axis, and a span is
//! settled as soon as two of its start, end, center, and extent are known.
//! Equalities are propagated until nothing changes; inequalities are only
//! checked against the result.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    canvas::Canvas,
    constraint::{Anchor, Attribute, Constraint, ConstraintBackend, Relation, ViewId},
    geometry::{Axis, Point, Rect, Size},
};

const TOLERANCE: f32 = 1e-3;

/// Why a set of constraints could not be turned into frames.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The root view was not created by the canvas being solved.
    #[error("{0} is not part of this canvas")]
    UnknownView(ViewId),
    /// Two constraints assign different values to the same attribute.
    #[error("conflicting constraints on {view}: {attribute:?} is both {existing} and {proposed}")]
    Conflict {
        /// View whose attribute is over-constrained.
        view: ViewId,
        /// The attribute in question.
        attribute: Attribute,
        /// Value derived first.
        existing: f32,
        /// Value the conflicting constraint asks for.
        proposed: f32,
    },
    /// Not enough constraints to place a view.
    #[error("{view} is underdetermined along the {axis:?} axis")]
    Underdetermined {
        /// View that could not be placed.
        view: ViewId,
        /// Axis lacking information.
        axis: Axis,
    },
    /// An inequality does not hold for the solved frames.
    #[error("inequality installed on {owner} does not hold: {lhs} {relation:?} {rhs}")]
    Unsatisfied {
        /// View the inequality is installed on.
        owner: ViewId,
        /// The relation that failed.
        relation: Relation,
        /// Solved left-hand side.
        lhs: f32,
        /// Solved right-hand side.
        rhs: f32,
    },
}

/// Solved frames, keyed by view, in the root's coordinate space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frames {
    frames: BTreeMap<ViewId, Rect>,
}

impl Frames {
    /// Frame of `view`, if it was part of the solved hierarchy.
    #[must_use]
    pub fn frame(&self, view: ViewId) -> Option<Rect> {
        self.frames.get(&view).copied()
    }

    /// All solved frames in view order.
    pub fn iter(&self) -> impl Iterator<Item = (ViewId, Rect)> + '_ {
        self.frames.iter().map(|(view, rect)| (*view, *rect))
    }

    /// Number of solved views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no view was solved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// What is known about a view along one axis.
#[derive(Debug, Clone, Copy, Default)]
struct Span {
    start: Option<f32>,
    end: Option<f32>,
    center: Option<f32>,
    extent: Option<f32>,
}

impl Span {
    const fn get(&self, anchor: Anchor) -> Option<f32> {
        match anchor {
            Anchor::Start => self.start,
            Anchor::End => self.end,
            Anchor::Center => self.center,
            Anchor::Extent => self.extent,
        }
    }

    const fn slot(&mut self, anchor: Anchor) -> &mut Option<f32> {
        match anchor {
            Anchor::Start => &mut self.start,
            Anchor::End => &mut self.end,
            Anchor::Center => &mut self.center,
            Anchor::Extent => &mut self.extent,
        }
    }

    /// Records `value`; returns the previously known value if it disagrees.
    fn assign(&mut self, anchor: Anchor, value: f32) -> Result<bool, f32> {
        if let Some(existing) = self.get(anchor) {
            return if (existing - value).abs() > TOLERANCE {
                Err(existing)
            } else {
                Ok(false)
            };
        }
        *self.slot(anchor) = Some(value);
        self.settle();
        Ok(true)
    }

    fn settle(&mut self) {
        let (start, extent) = match (self.start, self.extent, self.end, self.center) {
            (Some(start), Some(extent), _, _) => (start, extent),
            (Some(start), None, Some(end), _) => (start, end - start),
            (Some(start), None, None, Some(center)) => (start, 2.0 * (center - start)),
            (None, Some(extent), Some(end), _) => (end - extent, extent),
            (None, Some(extent), None, Some(center)) => (extent.mul_add(-0.5, center), extent),
            (None, None, Some(end), Some(center)) => (2.0f32.mul_add(center, -end), 2.0 * (end - center)),
            _ => return,
        };
        self.start = Some(start);
        self.extent = Some(extent);
        self.end = Some(start + extent);
        self.center = Some(extent.mul_add(0.5, start));
    }

    const fn settled(&self) -> Option<(f32, f32)> {
        match (self.start, self.extent) {
            (Some(start), Some(extent)) => Some((start, extent)),
            _ => None,
        }
    }
}

/// Single-use propagation state over one hierarchy of a [`Canvas`].
#[derive(Debug)]
pub(crate) struct Solver<'a> {
    canvas: &'a Canvas,
    order: Vec<ViewId>,
    spans: BTreeMap<ViewId, [Span; 2]>,
}

impl<'a> Solver<'a> {
    pub(crate) fn new(canvas: &'a Canvas, order: Vec<ViewId>) -> Self {
        let spans = order.iter().map(|view| (*view, [Span::default(); 2])).collect();
        Self {
            canvas,
            order,
            spans,
        }
    }

    pub(crate) fn seed_frame(mut self, root: ViewId, frame: Rect) -> Result<Self, SolveError> {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            self.assign(root, axis.leading_edge(), frame.start(axis))?;
            self.assign(root, axis.dimension(), frame.size().extent(axis))?;
        }
        Ok(self)
    }

    pub(crate) fn seed_origin(mut self, root: ViewId, origin: Point) -> Result<Self, SolveError> {
        self.assign(root, Attribute::Left, origin.x)?;
        self.assign(root, Attribute::Top, origin.y)?;
        Ok(self)
    }

    pub(crate) fn run(mut self) -> Result<Frames, SolveError> {
        let installed: Vec<(ViewId, Constraint)> = self
            .order
            .iter()
            .flat_map(|owner| {
                self.canvas
                    .constraints(*owner)
                    .iter()
                    .map(move |constraint| (*owner, *constraint))
            })
            .collect();
        let (equalities, inequalities): (Vec<_>, Vec<_>) = installed
            .into_iter()
            .partition(|(_, constraint)| constraint.relation == Relation::Equal);

        let mut rounds = 0usize;
        while self.propagate(&equalities)? {
            rounds += 1;
        }
        tracing::trace!(rounds, views = self.order.len(), "constraint propagation settled");

        for (owner, constraint) in &inequalities {
            self.check(*owner, constraint)?;
        }

        let mut frames = BTreeMap::new();
        for view in &self.order {
            let [horizontal, vertical] = self.spans[view];
            let (x, width) = horizontal.settled().ok_or(SolveError::Underdetermined {
                view: *view,
                axis: Axis::Horizontal,
            })?;
            let (y, height) = vertical.settled().ok_or(SolveError::Underdetermined {
                view: *view,
                axis: Axis::Vertical,
            })?;
            frames.insert(*view, Rect::new(Point::new(x, y), Size::new(width, height)));
        }
        Ok(Frames { frames })
    }

    /// One sweep over the equalities; returns whether anything new was learned.
    fn propagate(&mut self, equalities: &[(ViewId, Constraint)]) -> Result<bool, SolveError> {
        let mut progressed = false;
        for (_, constraint) in equalities {
            let lhs = self.value(constraint.from, constraint.from_attribute);
            let rhs = self.rhs(constraint);
            progressed |= match (lhs, rhs) {
                (_, Some(rhs)) => self.assign(constraint.from, constraint.from_attribute, rhs)?,
                (Some(lhs), None) => match constraint.to {
                    Some(to) if constraint.multiplier != 0.0 => self.assign(
                        to,
                        constraint.to_attribute,
                        (lhs - constraint.constant) / constraint.multiplier,
                    )?,
                    _ => false,
                },
                (None, None) => false,
            };
        }
        Ok(progressed)
    }

    fn check(&self, owner: ViewId, constraint: &Constraint) -> Result<(), SolveError> {
        let (Some(lhs), Some(rhs)) = (
            self.value(constraint.from, constraint.from_attribute),
            self.rhs(constraint),
        ) else {
            return Ok(());
        };
        let holds = match constraint.relation {
            Relation::Equal => (lhs - rhs).abs() <= TOLERANCE,
            Relation::LessThanOrEqual => lhs <= rhs + TOLERANCE,
            Relation::GreaterThanOrEqual => lhs + TOLERANCE >= rhs,
        };
        if holds {
            Ok(())
        } else {
            Err(SolveError::Unsatisfied {
                owner,
                relation: constraint.relation,
                lhs,
                rhs,
            })
        }
    }

    fn rhs(&self, constraint: &Constraint) -> Option<f32> {
        match constraint.to {
            Some(to) if constraint.to_attribute != Attribute::NotAnAttribute => self
                .value(to, constraint.to_attribute)
                .map(|value| value.mul_add(constraint.multiplier, constraint.constant)),
            _ => Some(constraint.constant),
        }
    }

    fn value(&self, view: ViewId, attribute: Attribute) -> Option<f32> {
        let axis = attribute.axis()?;
        let anchor = attribute.anchor()?;
        let raw = self.spans.get(&view)?[axis.index()].get(anchor)?;
        Some(raw + attribute.margin_offset(&self.canvas.layout_margins(view)))
    }

    /// Records `attribute == value`; views outside the solved hierarchy are ignored.
    fn assign(&mut self, view: ViewId, attribute: Attribute, value: f32) -> Result<bool, SolveError> {
        let (Some(axis), Some(anchor)) = (attribute.axis(), attribute.anchor()) else {
            return Ok(false);
        };
        let offset = attribute.margin_offset(&self.canvas.layout_margins(view));
        let Some(spans) = self.spans.get_mut(&view) else {
            return Ok(false);
        };
        spans[axis.index()]
            .assign(anchor, value - offset)
            .map_err(|existing| SolveError::Conflict {
                view,
                attribute,
                existing: existing + offset,
                proposed: value,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Constrain, ConstraintBuilder, EdgeAnchor};
    use crate::geometry::EdgeInsets;

    fn root_frame(width: f32, height: f32) -> Rect {
        Rect::from_size(Size::new(width, height))
    }

    #[test]
    fn span_settles_from_any_pair() {
        let mut span = Span::default();
        assert_eq!(span.assign(Anchor::End, 30.0), Ok(true));
        assert!(span.settled().is_none());
        assert_eq!(span.assign(Anchor::Center, 20.0), Ok(true));
        assert_eq!(span.settled(), Some((10.0, 20.0)));
        assert_eq!(span.assign(Anchor::Start, 10.0), Ok(false));
        assert_eq!(span.assign(Anchor::Extent, 25.0), Err(20.0));
    }

    #[test]
    fn centered_child_with_fixed_size() {
        let mut canvas = Canvas::new();
        let root = canvas.create_view();
        let child = canvas.create_view();
        canvas.add_subview(root, child);
        canvas.constrain_size(child, Size::new(20.0, 10.0));
        canvas.constrain_center(root, child, 0.0, 5.0);

        let frames = canvas.solve(root, root_frame(100.0, 50.0)).unwrap();
        let frame = frames.frame(child).unwrap();
        assert_eq!(frame.origin(), Point::new(40.0, 15.0));
        assert_eq!(frame.size(), Size::new(20.0, 10.0));
    }

    #[test]
    fn margin_attributes_respect_layout_margins() {
        let mut canvas = Canvas::new();
        let root = canvas.create_view();
        let child = canvas.create_view();
        canvas.add_subview(root, child);
        canvas.set_layout_margins(root, EdgeInsets::new(1.0, 2.0, 3.0, 4.0));
        canvas.constrain_inside(root, child, 0.0, EdgeAnchor::Margin);

        let frames = canvas.solve(root, root_frame(100.0, 50.0)).unwrap();
        let frame = frames.frame(child).unwrap();
        assert_eq!(frame.origin(), Point::new(2.0, 1.0));
        assert_eq!(frame.size(), Size::new(94.0, 46.0));
    }

    #[test]
    fn propagation_runs_backwards_through_chains() {
        let mut canvas = Canvas::new();
        let root = canvas.create_view();
        let a = canvas.create_view();
        let b = canvas.create_view();
        canvas.add_subview(root, a);
        canvas.add_subview(root, b);
        canvas.constrain_size(a, Size::new(10.0, 10.0));
        canvas.constrain_size(b, Size::new(10.0, 10.0));
        ConstraintBuilder::new(root).top_edges(a, 0.0, EdgeAnchor::Bounds).build(&mut canvas);
        ConstraintBuilder::new(root).top_edges(b, 0.0, EdgeAnchor::Bounds).build(&mut canvas);
        // Only the last view is anchored horizontally.
        ConstraintBuilder::new(root).right_edges(b, 0.0, EdgeAnchor::Bounds).build(&mut canvas);
        ConstraintBuilder::new(root).left_right(a, b, 5.0).build(&mut canvas);

        let frames = canvas.solve(root, root_frame(100.0, 10.0)).unwrap();
        assert_eq!(frames.frame(b).unwrap().x(), 90.0);
        assert_eq!(frames.frame(a).unwrap().x(), 75.0);
    }

    #[test]
    fn conflicting_sizes_are_reported() {
        let mut canvas = Canvas::new();
        let root = canvas.create_view();
        ConstraintBuilder::new(root).width(30.0).build(&mut canvas);
        canvas.add_constraint(
            root,
            ConstraintBuilder::new(root).width(40.0).constraint(),
        );

        let error = canvas.solve_at(root, Point::zero()).unwrap_err();
        assert!(matches!(
            error,
            SolveError::Conflict { attribute: Attribute::Width, .. }
        ));
    }

    #[test]
    fn missing_size_is_underdetermined() {
        let mut canvas = Canvas::new();
        let root = canvas.create_view();
        let child = canvas.create_view();
        canvas.add_subview(root, child);
        canvas.constrain_top_left(root, child, 0.0, EdgeAnchor::Bounds);

        let error = canvas.solve(root, root_frame(10.0, 10.0)).unwrap_err();
        assert_eq!(
            error,
            SolveError::Underdetermined {
                view: child,
                axis: Axis::Horizontal
            }
        );
    }

    #[test]
    fn inequalities_are_checked_after_solving() {
        let mut canvas = Canvas::new();
        let root = canvas.create_view();
        ConstraintBuilder::new(root)
            .width(50.0)
            .relation(Relation::LessThanOrEqual)
            .build(&mut canvas);

        assert!(canvas.solve(root, root_frame(40.0, 10.0)).is_ok());
        let error = canvas.solve(root, root_frame(60.0, 10.0)).unwrap_err();
        assert!(matches!(error, SolveError::Unsatisfied { lhs, rhs, .. } if lhs == 60.0 && rhs == 50.0));
    }
}
