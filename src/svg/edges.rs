//! Edge curves.
//!
//! Walks source axis -> target axis -> tag and draws every tag's group.
//! Style arrays are scoped to their group: edge `i` of a group reads element
//! `i` of that group's arrays.

use super::scale::Scales;
use super::styles::Classes;
use super::types::{DrawSurface, Primitive, Shape};
use crate::error::{Error, Result};
use crate::style::EdgeStyle;
use crate::types::{EdgeGroup, HivePlotDocument};

pub fn render_edges(doc: &HivePlotDocument, scales: &Scales, surface: &mut DrawSurface) -> Result<()> {
    for (from, targets) in &doc.edges {
        for (to, tags) in targets {
            for (tag, group) in tags {
                if group.is_empty() {
                    tracing::trace!(%from, %to, %tag, "skipping edge group without ids");
                    continue;
                }
                if group.curves.len() < group.len() {
                    return Err(Error::MissingCurves {
                        from: from.clone(),
                        to: to.clone(),
                        tag: tag.clone(),
                        ids: group.len(),
                        curves: group.curves.len(),
                    });
                }
                tracing::debug!(%from, %to, %tag, count = group.len(), "drawing edges");
                render_group(group, scales, surface)?;
            }
        }
    }
    Ok(())
}

fn render_group(group: &EdgeGroup, scales: &Scales, surface: &mut DrawSurface) -> Result<()> {
    let style = EdgeStyle::from_raw(&group.edge_kwargs)?;

    for (i, curve) in group.curves.iter().take(group.len()).enumerate() {
        let attrs = style.resolve(i)?;
        let path = Shape::Path {
            points: curve.iter().map(|&c| scales.point(c)).collect(),
        };
        let mut primitive = Primitive::new(Classes::EDGE, path)
            .attr("fill", "none")
            .attr("stroke", attrs.stroke)
            .num_attr("stroke-opacity", attrs.opacity)
            .num_attr("stroke-width", attrs.width);
        if let Some(dash) = attrs.dasharray {
            primitive = primitive.attr("stroke-dasharray", dash);
        }
        surface.push(primitive);
    }
    Ok(())
}
