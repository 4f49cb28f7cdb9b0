//! Drawable primitives and the retained surface they are collected on.

use serde::{Deserialize, Serialize};

/// A point in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Geometry of a primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Line { from: Point, to: Point },
    Circle { center: Point, r: f64 },
    Path { points: Vec<Point> },
    Text { at: Point, content: String },
}

impl Shape {
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Circle { .. } => "circle",
            Shape::Path { .. } => "path",
            Shape::Text { .. } => "text",
        }
    }
}

/// One emitted element: geometry, a class, and presentation attributes in
/// insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub class: String,
    pub shape: Shape,
    pub attrs: Vec<(String, String)>,
}

impl Primitive {
    pub fn new(class: &str, shape: Shape) -> Self {
        Self {
            class: class.to_string(),
            shape,
            attrs: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn num_attr(self, name: &str, value: f64) -> Self {
        self.attr(name, super::renderer::fmt_num(value))
    }

    /// Look up a presentation attribute by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Retained list of primitives for one render call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawSurface {
    pub width: f64,
    pub height: f64,
    /// Selector of the element this plot is mounted under
    pub container: String,
    primitives: Vec<Primitive>,
}

impl DrawSurface {
    pub fn new(width: f64, height: f64, container: &str) -> Self {
        Self {
            width,
            height,
            container: container.to_string(),
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Primitive> + 'a {
        self.primitives.iter().filter(move |p| p.class == class)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
