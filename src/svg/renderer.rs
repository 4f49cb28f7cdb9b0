//! SVG serializer - converts a DrawSurface into an SVG string.
//!
//! Pure string building, no DOM manipulation. Primitives are written in the
//! order they were pushed, inside one `<g class="hive-plot">` scope.

use super::types::{DrawSurface, Point, Primitive, Shape};

impl DrawSurface {
    /// Serialize the surface as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.len() + 4);

        parts.push(svg_open_tag(self.width, self.height));
        parts.push(format!(
            r#"<g class="hive-plot" data-container="{}">"#,
            escape_xml(&self.container)
        ));
        for primitive in self.primitives() {
            parts.push(format!("  {}", render_primitive(primitive)));
        }
        parts.push("</g>".to_string());
        parts.push("</svg>".to_string());

        parts.join("\n")
    }
}

fn svg_open_tag(width: f64, height: f64) -> String {
    let w = fmt_num(width);
    let h = fmt_num(height);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
        w, h, w, h
    )
}

fn render_primitive(primitive: &Primitive) -> String {
    let mut attrs = format!(r#"class="{}""#, escape_xml(&primitive.class));

    match &primitive.shape {
        Shape::Line { from, to } => {
            attrs.push_str(&format!(
                r#" x1="{}" y1="{}" x2="{}" y2="{}""#,
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y)
            ));
        }
        Shape::Circle { center, r } => {
            attrs.push_str(&format!(
                r#" cx="{}" cy="{}" r="{}""#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*r)
            ));
        }
        Shape::Path { points } => {
            attrs.push_str(&format!(r#" d="{}""#, path_data(points)));
        }
        Shape::Text { at, .. } => {
            attrs.push_str(&format!(r#" x="{}" y="{}""#, fmt_num(at.x), fmt_num(at.y)));
        }
    }

    for (name, value) in &primitive.attrs {
        attrs.push_str(&format!(r#" {}="{}""#, name, escape_xml(value)));
    }

    let tag = primitive.shape.tag();
    match &primitive.shape {
        Shape::Text { content, .. } => {
            format!("<{} {}>{}</{}>", tag, attrs, escape_xml(content), tag)
        }
        _ => format!("<{} {} />", tag, attrs),
    }
}

/// Path data for a straight-segment polyline: "M x,y L x,y ..."
pub fn path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{},{}", cmd, fmt_num(p.x), fmt_num(p.y))
        })
        .collect()
}

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a coordinate or attribute number: integers without a decimal
/// point, everything else rounded to 6 decimals with trailing zeros removed.
pub fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let s = format!("{:.6}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
