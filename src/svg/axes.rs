//! Axis lines.

use super::scale::Scales;
use super::styles::{AxisStroke, Classes};
use super::types::{DrawSurface, Primitive, Shape};
use crate::types::HivePlotDocument;

/// One fixed-style line per axis, from `start` to `end`.
pub fn render_axes(doc: &HivePlotDocument, scales: &Scales, surface: &mut DrawSurface) {
    for (name, axis) in &doc.axes {
        tracing::trace!(axis = %name, "drawing axis");
        let line = Shape::Line {
            from: scales.point(axis.start),
            to: scales.point(axis.end),
        };
        surface.push(
            Primitive::new(Classes::AXIS, line)
                .attr("stroke", AxisStroke::COLOR)
                .num_attr("stroke-width", AxisStroke::WIDTH)
                .num_attr("stroke-opacity", AxisStroke::OPACITY),
        );
    }
}
