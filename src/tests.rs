//! End-to-end tests through the `anchorage` facade.

use crate::prelude::*;
use crate::{Attribute, Constraint, ConstraintId, Point, SolveError, debug};

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A backend that only records what the engine asks of it.
#[derive(Debug, Default)]
struct Recorder {
    constraints: Vec<Vec<Constraint>>,
    margins: Vec<EdgeInsets>,
    subviews: Vec<(ViewId, ViewId)>,
    updates: Vec<(ConstraintId, f32)>,
    relayouts: Vec<ViewId>,
}

impl Recorder {
    fn slot(view: ViewId) -> usize {
        usize::try_from(view.raw()).expect("view id fits in usize")
    }
}

impl ConstraintBackend for Recorder {
    fn create_view(&mut self) -> ViewId {
        let id = u32::try_from(self.constraints.len()).expect("too many views");
        self.constraints.push(Vec::new());
        self.margins.push(EdgeInsets::ZERO);
        ViewId::new(id)
    }

    fn add_subview(&mut self, parent: ViewId, child: ViewId) {
        self.subviews.retain(|(_, existing)| *existing != child);
        self.subviews.push((parent, child));
    }

    fn set_layout_margins(&mut self, view: ViewId, margins: EdgeInsets) {
        let slot = Self::slot(view);
        self.margins[slot] = margins;
    }

    fn constraints(&self, owner: ViewId) -> &[Constraint] {
        self.constraints
            .get(Self::slot(owner))
            .map_or(&[], Vec::as_slice)
    }

    fn add_constraint(&mut self, owner: ViewId, constraint: Constraint) -> ConstraintId {
        let slot = Self::slot(owner);
        self.constraints[slot].push(constraint);
        ConstraintId {
            owner,
            index: self.constraints[slot].len() - 1,
        }
    }

    fn set_constant(&mut self, id: ConstraintId, constant: f32) {
        let slot = Self::slot(id.owner);
        self.constraints[slot][id.index].constant = constant;
        self.updates.push((id, constant));
    }

    fn layout_if_needed(&mut self, view: ViewId) {
        self.relayouts.push(view);
    }
}

fn screen() -> Element {
    let toolbar = hstack([
        Element::leaf().width(44.0).height(44.0),
        Element::leaf().height(44.0).margin(8.0),
        Element::leaf().width(44.0).height(44.0),
    ])
    .width(320.0);
    vstack([toolbar, Element::leaf()])
        .width(320.0)
        .height(480.0)
        .halign(HorizontalAlignment::Center)
}

// ============================================================================
// Facade Tests
// ============================================================================

#[test]
fn test_screen_layout_solves() {
    debug::install_tracing();

    let mut canvas = Canvas::new();
    let root = screen().resolve(&mut canvas).view;
    let frames = canvas
        .solve(root, Rect::from_size(Size::new(320.0, 480.0)))
        .expect("screen layout solves");
    assert_eq!(frames.len(), 6);

    let rows = canvas.subviews(root).to_vec();
    let toolbar = frames.frame(rows[0]).expect("toolbar frame");
    let body = frames.frame(rows[1]).expect("body frame");
    // Tallest toolbar item is 8 + 44 + 8
    assert_eq!(toolbar.height(), 60.0);
    assert_eq!(body.y(), 60.0);
    assert_eq!(body.max_y(), 480.0);

    let items = canvas.subviews(rows[0]).to_vec();
    let search = frames.frame(items[1]).expect("search field frame");
    assert_eq!(search.x(), 52.0);
    assert_eq!(search.max_x(), 268.0);
    assert_eq!(search.y(), 8.0);
}

#[test]
fn test_engine_runs_on_a_custom_backend() {
    let mut backend = Recorder::default();
    let tree = || {
        hstack([
            Element::leaf().width(10.0).height(10.0),
            Element::leaf().width(20.0).height(10.0),
        ])
        .padding(EdgeInsets::symmetric(2.0, 4.0))
    };

    let resolved = tree().resolve(&mut backend);
    assert_eq!(resolved.width, Length::Fixed(38.0));
    assert_eq!(resolved.height, Length::Fixed(14.0));
    assert_eq!(backend.margins[Recorder::slot(resolved.view)].left, 4.0);
    assert_eq!(backend.subviews.len(), 2);
    assert!(
        backend
            .constraints(resolved.view)
            .iter()
            .any(|constraint| constraint.from_attribute == Attribute::Width
                && constraint.constant == 38.0)
    );
    assert!(backend.updates.is_empty());
    assert!(backend.relayouts.is_empty());
}

#[test]
fn test_constrain_shortcuts_through_facade() {
    let mut canvas = Canvas::new();
    let root = canvas.create_view();
    let badge = canvas.create_view();
    canvas.add_subview(root, badge);
    canvas.set_layout_margins(root, EdgeInsets::all(10.0));
    canvas.constrain_size(badge, Size::new(20.0, 20.0));
    canvas.constrain_bottom_left(root, badge, 5.0, EdgeAnchor::Margin);

    let frames = canvas
        .solve(root, Rect::from_size(Size::new(100.0, 100.0)))
        .expect("badge layout solves");
    let frame = frames.frame(badge).expect("badge frame");
    assert_eq!(frame.x(), 15.0);
    assert_eq!(frame.max_y(), 85.0);
}

#[test]
fn test_flexible_root_needs_a_frame() {
    let mut canvas = Canvas::new();
    let root = hstack([Element::leaf()]).resolve(&mut canvas).view;

    let error = canvas
        .solve_at(root, Point::zero())
        .expect_err("a flexible stack has no size of its own");
    assert!(matches!(error, SolveError::Underdetermined { .. }));
    assert!(error.to_string().contains("underdetermined"));

    assert!(
        canvas
            .solve(root, Rect::from_size(Size::new(50.0, 20.0)))
            .is_ok()
    );
}
