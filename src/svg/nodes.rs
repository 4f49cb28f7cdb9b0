//! Node circles.

use super::scale::Scales;
use super::styles::Classes;
use super::types::{DrawSurface, Primitive, Shape};
use crate::error::{Error, Result};
use crate::style::NodeStyle;
use crate::types::HivePlotDocument;

/// One circle per node. Each axis's style is normalized once and indexed by
/// the node's position on that axis.
pub fn render_nodes(doc: &HivePlotDocument, scales: &Scales, surface: &mut DrawSurface) -> Result<()> {
    for (name, axis) in &doc.axes {
        let nodes = &axis.nodes;
        if nodes.x.len() != nodes.y.len() {
            return Err(Error::NodeLength {
                axis: name.clone(),
                x: nodes.x.len(),
                y: nodes.y.len(),
            });
        }
        if nodes.is_empty() {
            continue;
        }

        let style = match doc.node_viz_kwargs.get(name) {
            Some(raw) => NodeStyle::from_raw(raw)?,
            None => NodeStyle::default(),
        };
        tracing::debug!(axis = %name, count = nodes.len(), "drawing nodes");

        for (i, (&x, &y)) in nodes.x.iter().zip(&nodes.y).enumerate() {
            let attrs = style.resolve(i)?;
            let circle = Shape::Circle {
                center: scales.xy(x, y),
                r: attrs.radius,
            };
            surface.push(
                Primitive::new(Classes::NODE, circle)
                    .attr("fill", attrs.fill)
                    .num_attr("fill-opacity", attrs.fill_opacity)
                    .attr("stroke", attrs.stroke),
            );
        }
    }
    Ok(())
}
