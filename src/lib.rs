//! hiveplot-svg - Render hive plot JSON documents to SVG
//!
//! A hive plot places nodes on a few straight axes radiating from a common
//! origin and draws edges as curves between axes. The layout (axis placement,
//! node positions, edge curves) is computed upstream; this crate interprets
//! the resulting JSON, resolves matplotlib-style keyword styling, and emits
//! SVG primitives.
//!
//! # Example
//!
//! ```rust
//! use hiveplot_svg::{render, HivePlotDocument, RenderOptions};
//!
//! let doc: HivePlotDocument = serde_json::from_str(r#"{
//!     "axes": {"A": {"start": [0, 0], "end": [3, 0], "angle": 0,
//!                    "nodes": {"unique_id": [1], "x": [1.5], "y": [0]}}}
//! }"#).unwrap();
//! let surface = render(&doc, &RenderOptions::default()).unwrap();
//! println!("{}", surface.to_svg());
//! ```

pub mod colormap;
pub mod error;
pub mod render;
pub mod style;
pub mod svg;
pub mod types;

pub use colormap::{cmap_to_interpolator, Colormap, SequentialScale};
pub use error::{Error, Result};
pub use render::{load_document, render, RenderOptions, Source};
pub use style::{linestyle_to_dasharray, normalize_edge, normalize_node, scatter_size_to_radius};
pub use svg::DrawSurface;
pub use types::*;

/// Load `source` if needed and render it to SVG text.
///
/// # Example
/// ```rust
/// use hiveplot_svg::{render_to_svg, HivePlotDocument, RenderOptions};
///
/// let svg = render_to_svg(HivePlotDocument::default(), &RenderOptions::default()).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render_to_svg(source: impl Into<Source>, options: &RenderOptions) -> Result<String> {
    let doc = source.into().load()?;
    Ok(render(&doc, options)?.to_svg())
}
