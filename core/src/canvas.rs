//! An in-memory view hierarchy implementing [`ConstraintBackend`].
//!
//! `Canvas` stands in for a native view system: it hands out view ids, keeps
//! the subview tree and each view's constraint list, and can
//! [`solve`](Canvas::solve) the installed constraints into frames.

use crate::{
    constraint::{Constraint, ConstraintBackend, ConstraintId, ViewId},
    geometry::{EdgeInsets, Point, Rect},
    solve::{Frames, SolveError, Solver},
};

#[derive(Debug, Default)]
struct Node {
    parent: Option<ViewId>,
    subviews: Vec<ViewId>,
    margins: EdgeInsets,
    constraints: Vec<Constraint>,
    layout_passes: usize,
}

/// Headless view system backed by plain vectors.
#[derive(Debug, Default)]
pub struct Canvas {
    nodes: Vec<Node>,
}

impl Canvas {
    /// Creates an empty canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of views created so far.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `view` was created by this canvas.
    #[must_use]
    pub fn contains(&self, view: ViewId) -> bool {
        self.node(view).is_some()
    }

    /// Parent of `view`, if it has been added to one.
    #[must_use]
    pub fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.node(view).and_then(|node| node.parent)
    }

    /// Direct subviews of `view` in insertion order.
    #[must_use]
    pub fn subviews(&self, view: ViewId) -> &[ViewId] {
        self.node(view).map_or(&[], |node| node.subviews.as_slice())
    }

    /// Layout margins of `view`.
    #[must_use]
    pub fn layout_margins(&self, view: ViewId) -> EdgeInsets {
        self.node(view).map(|node| node.margins).unwrap_or_default()
    }

    /// How many times a constraint update on `view` requested a layout pass.
    #[must_use]
    pub fn layout_passes(&self, view: ViewId) -> usize {
        self.node(view).map_or(0, |node| node.layout_passes)
    }

    /// Every installed constraint together with the view that owns it.
    pub fn all_constraints(&self) -> impl Iterator<Item = (ViewId, &Constraint)> + '_ {
        self.views().flat_map(move |view| {
            self.constraints(view)
                .iter()
                .map(move |constraint| (view, constraint))
        })
    }

    /// `root` followed by all of its descendants, depth first.
    #[must_use]
    pub fn descendants(&self, root: ViewId) -> Vec<ViewId> {
        let mut order = Vec::new();
        let mut pending = vec![root];
        while let Some(view) = pending.pop() {
            order.push(view);
            pending.extend(self.subviews(view).iter().rev().copied());
        }
        order
    }

    /// Solves the constraints below `root`, pinning `root` to `frame`.
    ///
    /// # Errors
    ///
    /// See [`SolveError`].
    pub fn solve(&self, root: ViewId, frame: Rect) -> Result<Frames, SolveError> {
        self.solver(root)?.seed_frame(root, frame)?.run()
    }

    /// Solves the constraints below `root`, taking only its origin as given.
    ///
    /// The size of `root` has to follow from its own constraints.
    ///
    /// # Errors
    ///
    /// See [`SolveError`].
    pub fn solve_at(&self, root: ViewId, origin: Point) -> Result<Frames, SolveError> {
        self.solver(root)?.seed_origin(root, origin)?.run()
    }

    fn solver(&self, root: ViewId) -> Result<Solver<'_>, SolveError> {
        if !self.contains(root) {
            return Err(SolveError::UnknownView(root));
        }
        Ok(Solver::new(self, self.descendants(root)))
    }

    fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        (0..self.nodes.len()).map(|index| ViewId::new(Self::raw(index)))
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn raw(index: usize) -> u32 {
        index as u32
    }

    fn node(&self, view: ViewId) -> Option<&Node> {
        self.nodes.get(view.raw() as usize)
    }

    fn node_mut(&mut self, view: ViewId) -> &mut Node {
        let count = self.nodes.len();
        self.nodes
            .get_mut(view.raw() as usize)
            .unwrap_or_else(|| panic!("{view} does not belong to this canvas ({count} views)"))
    }

    fn is_ancestor(&self, ancestor: ViewId, mut view: ViewId) -> bool {
        loop {
            if view == ancestor {
                return true;
            }
            match self.parent(view) {
                Some(parent) => view = parent,
                None => return false,
            }
        }
    }
}

impl ConstraintBackend for Canvas {
    fn create_view(&mut self) -> ViewId {
        let view = ViewId::new(Self::raw(self.nodes.len()));
        self.nodes.push(Node::default());
        view
    }

    fn add_subview(&mut self, parent: ViewId, child: ViewId) {
        assert!(
            !self.is_ancestor(child, parent),
            "adding {child} under {parent} would create a cycle"
        );

        match self.node_mut(child).parent.replace(parent) {
            Some(previous) if previous == parent => return,
            Some(previous) => self.node_mut(previous).subviews.retain(|view| *view != child),
            None => {}
        }
        self.node_mut(parent).subviews.push(child);
    }

    fn set_layout_margins(&mut self, view: ViewId, margins: EdgeInsets) {
        self.node_mut(view).margins = margins;
    }

    fn constraints(&self, owner: ViewId) -> &[Constraint] {
        self.node(owner).map_or(&[], |node| node.constraints.as_slice())
    }

    fn add_constraint(&mut self, owner: ViewId, constraint: Constraint) -> ConstraintId {
        let constraints = &mut self.node_mut(owner).constraints;
        constraints.push(constraint);
        ConstraintId {
            owner,
            index: constraints.len() - 1,
        }
    }

    fn set_constant(&mut self, id: ConstraintId, constant: f32) {
        let node = self.node_mut(id.owner);
        let Some(constraint) = node.constraints.get_mut(id.index) else {
            panic!("{} has no constraint #{}", id.owner, id.index);
        };
        constraint.constant = constant;
    }

    fn layout_if_needed(&mut self, view: ViewId) {
        self.node_mut(view).layout_passes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::ConstraintBuilder, geometry::Size};

    #[test]
    fn reparenting_moves_the_view() {
        let mut canvas = Canvas::new();
        let a = canvas.create_view();
        let b = canvas.create_view();
        let child = canvas.create_view();

        canvas.add_subview(a, child);
        canvas.add_subview(a, child);
        assert_eq!(canvas.subviews(a), &[child]);

        canvas.add_subview(b, child);
        assert!(canvas.subviews(a).is_empty());
        assert_eq!(canvas.subviews(b), &[child]);
        assert_eq!(canvas.parent(child), Some(b));
    }

    #[test]
    #[should_panic(expected = "would create a cycle")]
    fn cycles_are_rejected() {
        let mut canvas = Canvas::new();
        let outer = canvas.create_view();
        let inner = canvas.create_view();
        canvas.add_subview(outer, inner);
        canvas.add_subview(inner, outer);
    }

    #[test]
    #[should_panic(expected = "does not belong to this canvas")]
    fn foreign_views_are_rejected() {
        let mut canvas = Canvas::new();
        canvas.set_layout_margins(ViewId::new(9), EdgeInsets::ZERO);
    }

    #[test]
    fn descendants_are_depth_first() {
        let mut canvas = Canvas::new();
        let root = canvas.create_view();
        let a = canvas.create_view();
        let a1 = canvas.create_view();
        let b = canvas.create_view();
        canvas.add_subview(root, a);
        canvas.add_subview(a, a1);
        canvas.add_subview(root, b);

        assert_eq!(canvas.descendants(root), [root, a, a1, b]);
    }

    #[test]
    fn all_constraints_reports_owners() {
        let mut canvas = Canvas::new();
        let a = canvas.create_view();
        let b = canvas.create_view();
        ConstraintBuilder::new(a).width(1.0).build(&mut canvas);
        ConstraintBuilder::new(b).height(2.0).build(&mut canvas);

        let owners: Vec<_> = canvas.all_constraints().map(|(owner, _)| owner).collect();
        assert_eq!(owners, [a, b]);
    }

    #[test]
    fn solving_an_unknown_root_fails() {
        let canvas = Canvas::new();
        let result = canvas.solve(ViewId::new(3), Rect::from_size(Size::zero()));
        assert_eq!(result, Err(SolveError::UnknownView(ViewId::new(3))));
    }
}
