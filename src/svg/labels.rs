//! Axis labels, placed just past each axis end and aligned by the axis angle.

use super::scale::Scales;
use super::styles::{Anchor, Baseline, Classes};
use super::types::{DrawSurface, Primitive, Shape};
use crate::render::RenderOptions;
use crate::types::{Coord, HivePlotDocument};

/// Labels for every axis carrying an `angle`. Axes without one are skipped.
pub fn render_labels(doc: &HivePlotDocument, scales: &Scales, options: &RenderOptions, surface: &mut DrawSurface) {
    for (name, axis) in &doc.axes {
        let Some(angle) = axis.angle else {
            tracing::trace!(axis = %name, "no angle, skipping label");
            continue;
        };
        let anchor = label_position(axis.start, axis.end, options.labels_buffer);
        let text = Shape::Text {
            at: scales.point(anchor),
            content: axis.label_text(name).to_string(),
        };
        surface.push(
            Primitive::new(Classes::AXIS_LABEL, text)
                .attr("text-anchor", horizontal_alignment(angle, options.horizontal_angle_span))
                .attr("dominant-baseline", vertical_alignment(angle, options.vertical_angle_span))
                .num_attr("font-size", options.font_size),
        );
    }
}

/// `start + buffer * (end - start)`
pub fn label_position(start: Coord, end: Coord, buffer: f64) -> Coord {
    [
        start[0] + buffer * (end[0] - start[0]),
        start[1] + buffer * (end[1] - start[1]),
    ]
}

/// `start` near 0 degrees, `end` near 180, `middle` otherwise.
pub fn horizontal_alignment(angle: f64, span: f64) -> &'static str {
    let angle = angle.rem_euclid(360.0);
    if angle <= span || angle >= 360.0 - span {
        Anchor::START
    } else if (angle - 180.0).abs() <= span {
        Anchor::END
    } else {
        Anchor::MIDDLE
    }
}

/// `auto` near 90 degrees, `hanging` near 270, `middle` otherwise.
pub fn vertical_alignment(angle: f64, span: f64) -> &'static str {
    let angle = angle.rem_euclid(360.0);
    if (angle - 90.0).abs() <= span {
        Baseline::AUTO
    } else if (angle - 270.0).abs() <= span {
        Baseline::HANGING
    } else {
        Baseline::MIDDLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! alignment_test {
        ($name:ident, $angle:expr, $h:expr, $v:expr) => {
            paste::paste! {
                #[test]
                fn [<test_alignment_ $name>]() {
                    assert_eq!(horizontal_alignment($angle, 60.0), $h);
                    assert_eq!(vertical_alignment($angle, 60.0), $v);
                }
            }
        };
    }

    alignment_test!(east, 0.0, "start", "middle");
    alignment_test!(north, 90.0, "middle", "auto");
    alignment_test!(north_west, 120.0, "end", "auto");
    alignment_test!(west, 180.0, "end", "middle");
    alignment_test!(south, 270.0, "middle", "hanging");
    alignment_test!(south_east, 330.0, "start", "hanging");
    alignment_test!(full_turn, 360.0, "start", "middle");
    alignment_test!(negative, -30.0, "start", "hanging");

    #[test]
    fn test_narrow_spans() {
        assert_eq!(horizontal_alignment(45.0, 30.0), "middle");
        assert_eq!(vertical_alignment(45.0, 30.0), "middle");
    }

    #[test]
    fn test_label_position() {
        assert_eq!(label_position([0.0, 0.0], [0.0, 2.0], 1.5), [0.0, 3.0]);
        assert_eq!(label_position([1.0, 1.0], [3.0, 1.0], 1.0), [3.0, 1.0]);
    }
}
