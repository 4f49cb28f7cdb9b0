//! Style normalization and per-element value resolution.
//!
//! Input dictionaries follow matplotlib's keyword conventions (`lw`, `ls`,
//! `c`, `facecolor`, `s`, ...). They are normalized to a canonical key set and
//! turned into typed styles that hand out one concrete value per element.

mod color;
mod normalize;
mod value;

pub use color::css_color;
pub use normalize::{normalize_edge, normalize_node, FILL_KEY};
pub use value::{ColorSpec, EdgeAttrs, EdgeStyle, NodeAttrs, NodeStyle, StyleValue};

/// Fallback values for keys missing from a style dictionary
pub struct Defaults;

impl Defaults {
    pub const EDGE_COLOR: &'static str = "black";
    pub const EDGE_ALPHA: f64 = 0.5;
    pub const LINEWIDTH: f64 = 1.5;
    pub const NODE_COLOR: &'static str = "black";
    pub const NODE_ALPHA: f64 = 0.8;
    pub const SCATTER_SIZE: f64 = 20.0;
}

/// SVG `stroke-dasharray` for a matplotlib linestyle. Solid and unknown styles give `None`.
pub fn linestyle_to_dasharray(linestyle: &str) -> Option<&'static str> {
    match linestyle {
        "--" | "dashed" => Some("5,5"),
        ":" | "dotted" => Some("2,2"),
        "-." | "dashdot" => Some("5,2,2,2"),
        _ => None,
    }
}

/// Circle radius for a scatter marker size. Scatter sizes are areas, so
/// `r = sqrt(s / pi)`.
pub fn scatter_size_to_radius(size: f64) -> f64 {
    (size / std::f64::consts::PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linestyle_table() {
        assert_eq!(linestyle_to_dasharray("-"), None);
        assert_eq!(linestyle_to_dasharray("solid"), None);
        assert_eq!(linestyle_to_dasharray("wiggly"), None);
        assert_eq!(linestyle_to_dasharray("--"), Some("5,5"));
        assert_eq!(linestyle_to_dasharray("dashed"), Some("5,5"));
        assert_eq!(linestyle_to_dasharray(":"), Some("2,2"));
        assert_eq!(linestyle_to_dasharray("dotted"), Some("2,2"));
        assert_eq!(linestyle_to_dasharray("-."), Some("5,2,2,2"));
        assert_eq!(linestyle_to_dasharray("dashdot"), Some("5,2,2,2"));
    }

    #[test]
    fn test_scatter_size_to_radius() {
        assert_eq!(scatter_size_to_radius(0.0), 0.0);
        let expected = (20.0 / std::f64::consts::PI).sqrt();
        assert!((scatter_size_to_radius(20.0) - expected).abs() < 1e-5);
        let mut last = 0.0;
        for s in [1.0, 5.0, 20.0, 100.0, 1000.0] {
            let r = scatter_size_to_radius(s);
            assert!(r > last);
            last = r;
        }
    }
}
