//! SVG output: draw surface, coordinate scales and the primitive renderers.
//!
//! - Axes (render_axes)
//! - Nodes (render_nodes)
//! - Edges (render_edges)
//! - Axis labels (render_labels)
//!
//! Pure string building, no DOM manipulation.

mod axes;
mod edges;
mod labels;
mod nodes;
mod renderer;
mod scale;
mod styles;
mod types;

pub use axes::render_axes;
pub use edges::render_edges;
pub use labels::{horizontal_alignment, label_position, render_labels, vertical_alignment};
pub use nodes::render_nodes;
pub use renderer::{escape_xml, fmt_num, path_data};
pub use scale::{LinearScale, Scales};
pub use styles::{Anchor, AxisStroke, Baseline, Classes};
pub use types::*;
