//! Linear data-space to screen-space scales.

use super::types::Point;
use crate::render::RenderOptions;
use crate::types::Coord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map `value` linearly. A zero-width domain maps to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}

/// The x/y scale pair for one render call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Scales {
    /// x maps onto `[left, width - right]`; y is inverted onto `[height - bottom, top]`.
    pub fn from_options(options: &RenderOptions) -> Self {
        let [x0, x1] = options.x_extent;
        let [y0, y1] = options.y_extent;
        Self {
            x: LinearScale::new((x0, x1), (options.left, options.width - options.right)),
            y: LinearScale::new((y0, y1), (options.height - options.bottom, options.top)),
        }
    }

    pub fn point(&self, coord: Coord) -> Point {
        self.xy(coord[0], coord[1])
    }

    pub fn xy(&self, x: f64, y: f64) -> Point {
        Point {
            x: self.x.apply(x),
            y: self.y.apply(y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scales() {
        let scales = Scales::from_options(&RenderOptions::default());
        assert_eq!(scales.point([-5.0, -5.0]), Point { x: 0.0, y: 450.0 });
        assert_eq!(scales.point([5.0, 5.0]), Point { x: 450.0, y: 0.0 });
        assert_eq!(scales.point([0.0, 0.0]), Point { x: 225.0, y: 225.0 });
    }

    #[test]
    fn test_margins() {
        let options = RenderOptions {
            top: 10.0,
            bottom: 20.0,
            left: 30.0,
            right: 40.0,
            width: 200.0,
            height: 100.0,
            ..RenderOptions::default()
        };
        let scales = Scales::from_options(&options);
        assert_eq!(scales.point([-5.0, -5.0]), Point { x: 30.0, y: 80.0 });
        assert_eq!(scales.point([5.0, 5.0]), Point { x: 160.0, y: 10.0 });
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearScale::new((1.0, 1.0), (0.0, 10.0));
        assert_eq!(scale.apply(1.0), 5.0);
    }
}
