//! Per-element style resolution.
//!
//! A normalized dictionary is turned into typed styles once per group (an
//! axis's nodes or one edge group). Each value is either a scalar that applies
//! to every element or a per-element array indexed by the element's position
//! within the group.

use serde_json::Value;

use super::color::css_color;
use super::normalize::{normalize_edge, normalize_node, FILL_KEY};
use super::{linestyle_to_dasharray, scatter_size_to_radius, Defaults};
use crate::colormap::{cmap_to_interpolator, SequentialScale};
use crate::error::{Error, Result};
use crate::types::RawStyle;

/// A scalar shared by all elements, or one value per element
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue<T> {
    Scalar(T),
    PerElement(Vec<T>),
}

impl<T: Clone> StyleValue<T> {
    /// Value for element `index`. Short arrays are an error rather than a silent default.
    pub fn pick(&self, key: &str, index: usize) -> Result<T> {
        match self {
            StyleValue::Scalar(value) => Ok(value.clone()),
            StyleValue::PerElement(values) => {
                values.get(index).cloned().ok_or_else(|| Error::StyleLength {
                    key: key.to_string(),
                    index,
                    len: values.len(),
                })
            }
        }
    }

    pub fn values(&self) -> &[T] {
        match self {
            StyleValue::Scalar(value) => std::slice::from_ref(value),
            StyleValue::PerElement(values) => values,
        }
    }
}

/// Conversion from a single JSON element
trait FromStyleJson: Sized {
    const EXPECTED: &'static str;
    fn from_style_json(value: &Value) -> Option<Self>;
}

impl FromStyleJson for f64 {
    const EXPECTED: &'static str = "a number";
    fn from_style_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromStyleJson for String {
    const EXPECTED: &'static str = "a string";
    fn from_style_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl<T: FromStyleJson> StyleValue<T> {
    fn from_json(key: &str, value: &Value) -> Result<Self> {
        let convert = |v: &Value| {
            T::from_style_json(v)
                .ok_or_else(|| invalid(key, format!("expected {}, got {}", T::EXPECTED, v)))
        };
        match value {
            Value::Array(items) => items
                .iter()
                .map(convert)
                .collect::<Result<Vec<_>>>()
                .map(StyleValue::PerElement),
            other => convert(other).map(StyleValue::Scalar),
        }
    }

    /// `null` counts as absent
    fn lookup(style: &RawStyle, key: &str) -> Result<Option<Self>> {
        present(style, key).map(|v| Self::from_json(key, v)).transpose()
    }
}

fn present<'a>(style: &'a RawStyle, key: &str) -> Option<&'a Value> {
    style.get(key).filter(|v| !v.is_null())
}

fn invalid(key: &str, message: String) -> Error {
    Error::InvalidStyle {
        key: key.to_string(),
        message,
    }
}

/// How a group's colors are chosen, decided once when the style is built
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    Literal(String),
    LiteralArray(Vec<String>),
    DataDriven {
        values: StyleValue<f64>,
        scale: SequentialScale,
    },
}

impl ColorSpec {
    pub fn pick(&self, key: &str, index: usize) -> Result<String> {
        match self {
            ColorSpec::Literal(color) => Ok(color.clone()),
            ColorSpec::LiteralArray(colors) => {
                colors.get(index).cloned().ok_or_else(|| Error::StyleLength {
                    key: key.to_string(),
                    index,
                    len: colors.len(),
                })
            }
            ColorSpec::DataDriven { values, scale } => {
                values.pick(key, index).map(|v| scale.apply(v))
            }
        }
    }

    fn data_driven(values: StyleValue<f64>, style: &RawStyle, lo: Option<f64>, hi: Option<f64>) -> Self {
        let cmap = cmap_to_interpolator(style.get("cmap").and_then(Value::as_str));
        let scale = SequentialScale::from_values(cmap, values.values(), lo, hi);
        ColorSpec::DataDriven { values, scale }
    }

    fn literal(key: &str, value: &Value) -> Result<Self> {
        Ok(match StyleValue::<String>::from_json(key, value)? {
            StyleValue::Scalar(color) => ColorSpec::Literal(css_color(&color)),
            StyleValue::PerElement(colors) => {
                ColorSpec::LiteralArray(colors.iter().map(|c| css_color(c)).collect())
            }
        })
    }
}

/// Read an optional bound, treating `null` as absent
fn bound(style: &RawStyle, key: &str) -> Result<Option<f64>> {
    match style.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| invalid(key, format!("expected a number, got {}", v))),
    }
}

/// `clim` as an optional `[min, max]` pair; either end may be `null`
fn clim(style: &RawStyle) -> Result<(Option<f64>, Option<f64>)> {
    match style.get("clim") {
        None | Some(Value::Null) => Ok((None, None)),
        Some(Value::Array(pair)) if pair.len() == 2 => {
            Ok((pair[0].as_f64(), pair[1].as_f64()))
        }
        Some(other) => Err(invalid("clim", format!("expected [min, max], got {}", other))),
    }
}

/// Resolved attributes for one edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAttrs {
    pub stroke: String,
    pub opacity: f64,
    pub width: f64,
    pub dasharray: Option<&'static str>,
}

/// Typed style for one edge group
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub stroke: ColorSpec,
    pub alpha: StyleValue<f64>,
    pub linewidth: StyleValue<f64>,
    pub linestyle: Option<StyleValue<String>>,
}

impl EdgeStyle {
    /// Normalize `raw` and build the group's typed style.
    ///
    /// `array` drives the stroke through the colormap and wins over `color`.
    pub fn from_raw(raw: &RawStyle) -> Result<Self> {
        let style = normalize_edge(raw);
        let stroke = match (present(&style, "array"), present(&style, "color")) {
            (Some(array), _) => {
                let values = StyleValue::<f64>::from_json("array", array)?;
                let (lo, hi) = clim(&style)?;
                ColorSpec::data_driven(values, &style, lo, hi)
            }
            (None, Some(color)) => ColorSpec::literal("color", color)?,
            (None, None) => ColorSpec::Literal(Defaults::EDGE_COLOR.to_string()),
        };
        Ok(Self {
            stroke,
            alpha: StyleValue::lookup(&style, "alpha")?
                .unwrap_or(StyleValue::Scalar(Defaults::EDGE_ALPHA)),
            linewidth: StyleValue::lookup(&style, "linewidth")?
                .unwrap_or(StyleValue::Scalar(Defaults::LINEWIDTH)),
            linestyle: StyleValue::lookup(&style, "linestyle")?,
        })
    }

    pub fn resolve(&self, index: usize) -> Result<EdgeAttrs> {
        let dasharray = match &self.linestyle {
            Some(ls) => linestyle_to_dasharray(&ls.pick("linestyle", index)?),
            None => None,
        };
        Ok(EdgeAttrs {
            stroke: self.stroke.pick("color", index)?,
            opacity: self.alpha.pick("alpha", index)?,
            width: self.linewidth.pick("linewidth", index)?,
            dasharray,
        })
    }
}

/// Resolved attributes for one node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAttrs {
    pub fill: String,
    pub fill_opacity: f64,
    pub radius: f64,
    pub stroke: String,
}

/// Typed style for the nodes of one axis
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    pub fill: ColorSpec,
    pub alpha: StyleValue<f64>,
    pub size: StyleValue<f64>,
    pub edgecolor: Option<ColorSpec>,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            fill: ColorSpec::Literal(Defaults::NODE_COLOR.to_string()),
            alpha: StyleValue::Scalar(Defaults::NODE_ALPHA),
            size: StyleValue::Scalar(Defaults::SCATTER_SIZE),
            edgecolor: None,
        }
    }
}

impl NodeStyle {
    /// Normalize `raw` and build the axis's typed style.
    ///
    /// A `_fill` array whose first element is a number is colormap-driven;
    /// any other array is a list of literal colors.
    pub fn from_raw(raw: &RawStyle) -> Result<Self> {
        let style = normalize_node(raw);
        let fill = match present(&style, FILL_KEY) {
            None => ColorSpec::Literal(Defaults::NODE_COLOR.to_string()),
            Some(value) if is_numeric(value) => {
                let values = StyleValue::<f64>::from_json(FILL_KEY, value)?;
                let lo = bound(&style, "vmin")?;
                let hi = bound(&style, "vmax")?;
                ColorSpec::data_driven(values, &style, lo, hi)
            }
            Some(value) => ColorSpec::literal(FILL_KEY, value)?,
        };
        let edgecolor = present(&style, "edgecolor")
            .map(|value| ColorSpec::literal("edgecolor", value))
            .transpose()?;
        Ok(Self {
            fill,
            alpha: StyleValue::lookup(&style, "alpha")?
                .unwrap_or(StyleValue::Scalar(Defaults::NODE_ALPHA)),
            size: StyleValue::lookup(&style, "s")?
                .unwrap_or(StyleValue::Scalar(Defaults::SCATTER_SIZE)),
            edgecolor,
        })
    }

    pub fn resolve(&self, index: usize) -> Result<NodeAttrs> {
        let stroke = match &self.edgecolor {
            Some(spec) => spec.pick("edgecolor", index)?,
            None => "none".to_string(),
        };
        Ok(NodeAttrs {
            fill: self.fill.pick("color", index)?,
            fill_opacity: self.alpha.pick("alpha", index)?,
            radius: scatter_size_to_radius(self.size.pick("s", index)?),
            stroke,
        })
    }
}

/// First element decides: numbers mean data-driven color
fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::Array(items) => items.first().map_or(false, Value::is_number),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Colormap;
    use serde_json::json;

    fn raw(value: Value) -> RawStyle {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_pick_scalar_and_array() {
        let scalar = StyleValue::Scalar(2.0);
        assert_eq!(scalar.pick("lw", 7).unwrap(), 2.0);
        let array = StyleValue::PerElement(vec![1.0, 2.0]);
        assert_eq!(array.pick("lw", 1).unwrap(), 2.0);
        assert!(matches!(
            array.pick("lw", 2),
            Err(Error::StyleLength { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn test_edge_defaults() {
        let style = EdgeStyle::from_raw(&RawStyle::new()).unwrap();
        let attrs = style.resolve(0).unwrap();
        assert_eq!(attrs.stroke, "black");
        assert_eq!(attrs.opacity, 0.5);
        assert_eq!(attrs.width, 1.5);
        assert_eq!(attrs.dasharray, None);
    }

    #[test]
    fn test_edge_array_overrides_color() {
        let style = EdgeStyle::from_raw(&raw(json!({
            "array": [0.0, 10.0],
            "color": ["#FF0000", "#00FF00"],
            "cmap": "cividis",
            "clim": [0, 10],
        })))
        .unwrap();
        let cividis = cmap_to_interpolator(Some("cividis"));
        assert_eq!(style.resolve(0).unwrap().stroke, cividis.interpolate(0.0));
        assert_eq!(style.resolve(1).unwrap().stroke, cividis.interpolate(1.0));
    }

    #[test]
    fn test_edge_domain_from_full_array() {
        let style = EdgeStyle::from_raw(&raw(json!({"array": [2.0, 4.0, 6.0]}))).unwrap();
        match &style.stroke {
            ColorSpec::DataDriven { scale, .. } => {
                assert_eq!(scale.domain, (2.0, 6.0));
                assert_eq!(scale.colormap, Colormap::default());
            }
            other => panic!("expected data-driven stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_color_array_and_linestyle() {
        let style = EdgeStyle::from_raw(&raw(json!({
            "color": ["red", "C1"],
            "ls": ["--", "solid"],
            "lw": [1, 3],
            "alpha": 0.2,
        })))
        .unwrap();
        let first = style.resolve(0).unwrap();
        assert_eq!(first.stroke, "red");
        assert_eq!(first.dasharray, Some("5,5"));
        assert_eq!(first.width, 1.0);
        let second = style.resolve(1).unwrap();
        assert_eq!(second.stroke, "#ff7f0e");
        assert_eq!(second.dasharray, None);
        assert_eq!(second.width, 3.0);
        assert_eq!(second.opacity, 0.2);
    }

    #[test]
    fn test_edge_rejects_wrong_types() {
        assert!(matches!(
            EdgeStyle::from_raw(&raw(json!({"alpha": "high"}))),
            Err(Error::InvalidStyle { .. })
        ));
        assert!(matches!(
            EdgeStyle::from_raw(&raw(json!({"array": [1, 2], "clim": 4}))),
            Err(Error::InvalidStyle { .. })
        ));
    }

    #[test]
    fn test_node_defaults() {
        let attrs = NodeStyle::from_raw(&RawStyle::new()).unwrap().resolve(3).unwrap();
        assert_eq!(attrs.fill, "black");
        assert_eq!(attrs.fill_opacity, 0.8);
        assert_eq!(attrs.stroke, "none");
        assert!((attrs.radius - (20.0 / std::f64::consts::PI).sqrt()).abs() < 1e-12);
        assert_eq!(NodeStyle::default().resolve(3).unwrap(), attrs);
    }

    #[test]
    fn test_node_numeric_fill_uses_colormap() {
        let style = NodeStyle::from_raw(&raw(json!({
            "c": [1.0, 2.0, 3.0],
            "cmap": "plasma",
            "vmax": 5.0,
        })))
        .unwrap();
        let plasma = cmap_to_interpolator(Some("plasma"));
        assert_eq!(style.resolve(0).unwrap().fill, plasma.interpolate(0.0));
        assert_eq!(style.resolve(2).unwrap().fill, plasma.interpolate(0.5));
    }

    #[test]
    fn test_node_string_fill_array_is_literal() {
        let style = NodeStyle::from_raw(&raw(json!({
            "facecolor": ["red", "blue"],
            "edgecolors": ["k", "white"],
            "size": [0, 20],
        })))
        .unwrap();
        let first = style.resolve(0).unwrap();
        assert_eq!(first.fill, "red");
        assert_eq!(first.stroke, "#000000");
        assert_eq!(first.radius, 0.0);
        assert_eq!(style.resolve(1).unwrap().fill, "blue");
        assert_eq!(style.resolve(1).unwrap().stroke, "white");
    }
}
