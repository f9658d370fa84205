//! The stack layout algorithm.
//!
//! One implementation serves both axes. Everything is phrased in terms of the
//! stacking axis (`axis`) and the cross axis (`axis.cross()`), with leading and
//! trailing standing for left/right or top/bottom.

use anchorage_core::{Axis, ConstraintBackend, ConstraintBuilder, EdgeInsets, ViewId};
use tracing::{debug, trace, warn};

use super::Stack;
use crate::{
    alignment::AxisAlignment,
    element::{Element, Resolved, Style, apply_size},
    length::Length,
};

/// A child already materialized, with the margin that faces its neighbour.
#[derive(Debug, Clone, Copy)]
struct Edge {
    view: ViewId,
    margin: f32,
}

/// Fully fixed content along the stacking axis.
#[derive(Debug, Clone, Copy)]
struct Run {
    first: Edge,
    last: Edge,
    /// Outer extent including the container padding.
    total: f32,
}

/// Running totals over the children along one axis.
#[derive(Debug, Clone, Copy)]
struct Extent {
    /// Every child so far had a fixed length on this axis.
    fixed: bool,
    /// Sum (stacking axis) or maximum (cross axis) of the outer extents.
    value: f32,
}

impl Stack {
    pub(crate) fn resolve(
        &self,
        view: Option<ViewId>,
        style: &Style,
        backend: &mut dyn ConstraintBackend,
    ) -> Resolved {
        let axis = self.axis;
        let cross = axis.cross();
        let padding = style.padding;

        let container = view.unwrap_or_else(|| backend.create_view());
        backend.set_layout_margins(container, padding);
        apply_size(container, style, backend);

        let mut resolved = Resolved {
            view: container,
            width: style.width,
            height: style.height,
        };

        let mut first: Option<Edge> = None;
        let mut last: Option<Edge> = None;
        let mut main = Extent {
            fixed: true,
            value: padding.along(axis),
        };
        let mut cross_extent = Extent {
            fixed: true,
            value: 0.0,
        };

        for child in &self.children {
            let placed = child.resolve(backend);
            backend.add_subview(container, placed.view);
            let margin = child.style().margin;

            match last {
                Some(previous) => {
                    let spacing = previous.margin + margin.leading(axis);
                    trace!(%container, before = %previous.view, after = %placed.view, spacing, "chaining");
                    ConstraintBuilder::new(container)
                        .adjacent(axis, previous.view, placed.view, spacing)
                        .build(backend);
                }
                None => {
                    first = Some(Edge {
                        view: placed.view,
                        margin: margin.leading(axis),
                    });
                }
            }

            match placed.length(axis) {
                Length::Fixed(length) if main.fixed => {
                    main.value += margin.leading(axis) + length + margin.trailing(axis);
                    assert!(
                        main.value.is_finite(),
                        "stack {container} accumulated a non-finite extent along {axis:?}"
                    );
                }
                _ => main.fixed = false,
            }

            place_across(container, cross, child, &placed, &padding, &mut cross_extent, backend);

            last = Some(Edge {
                view: placed.view,
                margin: margin.trailing(axis),
            });
        }

        let (Some(first), Some(last)) = (first, last) else {
            debug!(%container, ?axis, "empty stack");
            return resolved;
        };

        if cross_extent.fixed && style.length(cross).is_flexible() {
            debug!(%container, axis = ?cross, extent = cross_extent.value, "sizing container from children");
            resolved.set_length(cross, Length::Fixed(cross_extent.value));
            ConstraintBuilder::new(container)
                .extent(cross, cross_extent.value)
                .build(backend);
        }

        if main.fixed {
            let size = if let Length::Fixed(size) = style.length(axis) {
                size
            } else {
                debug!(%container, ?axis, extent = main.value, "sizing container from children");
                resolved.set_length(axis, Length::Fixed(main.value));
                ConstraintBuilder::new(container)
                    .extent(axis, main.value)
                    .build(backend);
                main.value
            };
            let run = Run {
                first,
                last,
                total: main.value,
            };
            align_along(container, axis, style, size, run, backend);
        } else {
            debug!(%container, ?axis, "flexible content, pinning both ends");
            ConstraintBuilder::new(container)
                .leading_edges(axis, first.view, first.margin)
                .build(backend);
            ConstraintBuilder::new(container)
                .trailing_edges(axis, last.view, last.margin)
                .build(backend);
        }

        resolved
    }
}

/// Places one child on the cross axis and folds it into the cross extent.
fn place_across(
    container: ViewId,
    cross: Axis,
    child: &Element,
    placed: &Resolved,
    padding: &EdgeInsets,
    extent: &mut Extent,
    backend: &mut dyn ConstraintBackend,
) {
    let margin = child.style().margin;
    let builder = ConstraintBuilder::new(container);

    let Length::Fixed(length) = placed.length(cross) else {
        extent.fixed = false;
        builder
            .leading_edges(cross, placed.view, margin.leading(cross))
            .build(backend);
        builder
            .trailing_edges(cross, placed.view, margin.trailing(cross))
            .build(backend);
        return;
    };

    if extent.fixed {
        let outer = padding.along(cross) + margin.along(cross) + length;
        extent.value = extent.value.max(outer);
    }

    let builder = match child.style().alignment_along(cross) {
        AxisAlignment::Leading => builder.leading_edges(cross, placed.view, margin.leading(cross)),
        AxisAlignment::Center => builder.centers(cross, placed.view, 0.0),
        AxisAlignment::Trailing => builder.trailing_edges(cross, placed.view, margin.trailing(cross)),
    };
    builder.build(backend);
}

/// Positions a fixed `run` inside a container of extent `size` along the
/// stacking axis.
fn align_along(
    container: ViewId,
    axis: Axis,
    style: &Style,
    size: f32,
    run: Run,
    backend: &mut dyn ConstraintBackend,
) {
    let Run { first, last, total } = run;
    let builder = ConstraintBuilder::new(container);

    if size < total {
        let overflow = half_rounded(total - size);
        warn!(%container, ?axis, size, total, overflow, "content overflows its stack");
        builder.leading_edges(axis, first.view, -overflow).build(backend);
        return;
    }

    let builder = match style.alignment_along(axis) {
        AxisAlignment::Leading => builder.leading_edges(axis, first.view, first.margin),
        AxisAlignment::Center => {
            let offset = half_rounded(size - total);
            builder.leading_edges(axis, first.view, first.margin + offset)
        }
        AxisAlignment::Trailing => builder.trailing_edges(axis, last.view, last.margin),
    };
    builder.build(backend);
}

/// Half of `value`, rounded half away from zero.
///
/// `f32::round` lives in `std`; this crate only has `core`.
fn half_rounded(value: f32) -> f32 {
    let half = value / 2.0;
    let magnitude = if half < 0.0 { -half } else { half };
    let whole = magnitude - magnitude % 1.0;
    let rounded = if magnitude - whole >= 0.5 { whole + 1.0 } else { whole };
    if half < 0.0 { -rounded } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::half_rounded;

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(half_rounded(53.0), 27.0);
        assert_eq!(half_rounded(15.0), 8.0);
        assert_eq!(half_rounded(10.0), 5.0);
        assert_eq!(half_rounded(0.0), 0.0);
        assert_eq!(half_rounded(-15.0), -8.0);
        assert_eq!(half_rounded(2.4), 1.0);
        assert_eq!(half_rounded(0.8), 0.0);
    }
}
