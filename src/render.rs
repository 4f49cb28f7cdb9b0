//! Orchestration: load a document, then draw axes, nodes, edges and labels.
//!
//! Loading is the only step that touches the outside world. Rendering is
//! synchronous and builds its own scales and surface on every call.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::svg::{render_axes, render_edges, render_labels, render_nodes, DrawSurface, Scales};
use crate::types::HivePlotDocument;

/// Layout of the drawing area and label settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Data-space x range mapped onto `[left, width - right]`. Default: [-5, 5]
    pub x_extent: [f64; 2],
    /// Data-space y range mapped onto `[height - bottom, top]`. Default: [-5, 5]
    pub y_extent: [f64; 2],
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    /// Default: 450
    pub width: f64,
    /// Default: 450
    pub height: f64,
    /// Selector of the element the plot is mounted under. Default: "body"
    pub container: String,
    /// Default: true
    pub show_labels: bool,
    /// Label distance from `start`, as a multiple of the axis length. Default: 1.1
    pub labels_buffer: f64,
    /// Default: 14
    pub font_size: f64,
    /// Degrees around 0/180 that get start/end text anchors. Default: 60
    pub horizontal_angle_span: f64,
    /// Degrees around 90/270 that get top/bottom baselines. Default: 60
    pub vertical_angle_span: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            x_extent: [-5.0, 5.0],
            y_extent: [-5.0, 5.0],
            top: 0.0,
            bottom: 0.0,
            left: 0.0,
            right: 0.0,
            width: 450.0,
            height: 450.0,
            container: "body".to_string(),
            show_labels: true,
            labels_buffer: 1.1,
            font_size: 14.0,
            horizontal_angle_span: 60.0,
            vertical_angle_span: 60.0,
        }
    }
}

impl RenderOptions {
    /// Read options from a JSON file; missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            location: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Where a document comes from
#[derive(Debug, Clone)]
pub enum Source {
    Document(HivePlotDocument),
    /// A file path, or `-` for stdin
    Location(String),
}

impl Source {
    pub fn load(self) -> Result<HivePlotDocument> {
        match self {
            Source::Document(doc) => Ok(doc),
            Source::Location(location) => load_document(&location),
        }
    }
}

impl From<HivePlotDocument> for Source {
    fn from(doc: HivePlotDocument) -> Self {
        Source::Document(doc)
    }
}

impl From<&str> for Source {
    fn from(location: &str) -> Self {
        Source::Location(location.to_string())
    }
}

/// Read and parse a hive plot document from a path or `-` (stdin).
pub fn load_document(location: &str) -> Result<HivePlotDocument> {
    let io_err = |source| Error::Io {
        location: location.to_string(),
        source,
    };
    let text = if location == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        std::fs::read_to_string(location).map_err(io_err)?
    };
    tracing::debug!(location, bytes = text.len(), "loaded hive plot document");
    Ok(serde_json::from_str(&text)?)
}

/// Draw a document: axes, then nodes, then edges, then (optionally) labels.
#[tracing::instrument(skip_all)]
pub fn render(doc: &HivePlotDocument, options: &RenderOptions) -> Result<DrawSurface> {
    let scales = Scales::from_options(options);
    let mut surface = DrawSurface::new(options.width, options.height, &options.container);

    render_axes(doc, &scales, &mut surface);
    render_nodes(doc, &scales, &mut surface)?;
    render_edges(doc, &scales, &mut surface)?;
    if options.show_labels {
        render_labels(doc, &scales, options, &mut surface);
    }

    tracing::debug!(
        axes = doc.axes.len(),
        primitives = surface.len(),
        "rendered hive plot"
    );
    Ok(surface)
}
