//! Colormap lookup and sequential color scales.
//!
//! Matplotlib colormap names are mapped onto the d3-scale-chromatic
//! interpolators shipped by `colorous`. Unknown names fall back to viridis.

use colorous::Gradient;

/// Known colormap names, in matplotlib spelling
const COLORMAPS: &[(&str, Gradient)] = &[
    // perceptually uniform sequential
    ("viridis", colorous::VIRIDIS),
    ("plasma", colorous::PLASMA),
    ("inferno", colorous::INFERNO),
    ("magma", colorous::MAGMA),
    ("cividis", colorous::CIVIDIS),
    ("turbo", colorous::TURBO),
    // sequential, single hue
    ("Greys", colorous::GREYS),
    ("Purples", colorous::PURPLES),
    ("Blues", colorous::BLUES),
    ("Greens", colorous::GREENS),
    ("Oranges", colorous::ORANGES),
    ("Reds", colorous::REDS),
    // sequential, multi hue
    ("YlOrBr", colorous::YELLOW_ORANGE_BROWN),
    ("YlOrRd", colorous::YELLOW_ORANGE_RED),
    ("OrRd", colorous::ORANGE_RED),
    ("PuRd", colorous::PURPLE_RED),
    ("RdPu", colorous::RED_PURPLE),
    ("BuPu", colorous::BLUE_PURPLE),
    ("GnBu", colorous::GREEN_BLUE),
    ("PuBu", colorous::PURPLE_BLUE),
    ("YlGnBu", colorous::YELLOW_GREEN_BLUE),
    ("PuBuGn", colorous::PURPLE_BLUE_GREEN),
    ("BuGn", colorous::BLUE_GREEN),
    ("YlGn", colorous::YELLOW_GREEN),
    ("cool", colorous::COOL),
    ("cubehelix", colorous::CUBEHELIX),
    // diverging
    ("PiYG", colorous::PINK_GREEN),
    ("PRGn", colorous::PURPLE_GREEN),
    ("BrBG", colorous::BROWN_GREEN),
    ("PuOr", colorous::PURPLE_ORANGE),
    ("RdGy", colorous::RED_GREY),
    ("RdBu", colorous::RED_BLUE),
    ("RdYlBu", colorous::RED_YELLOW_BLUE),
    ("RdYlGn", colorous::RED_YELLOW_GREEN),
    ("Spectral", colorous::SPECTRAL),
    // cyclic
    ("rainbow", colorous::RAINBOW),
    ("hsv", colorous::SINEBOW),
];

const DEFAULT_COLORMAP: usize = 0;

/// A [0, 1] -> color interpolator selected by name.
///
/// Two colormaps compare equal exactly when they interpolate identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colormap {
    index: usize,
    reversed: bool,
}

impl Default for Colormap {
    fn default() -> Self {
        Self {
            index: DEFAULT_COLORMAP,
            reversed: false,
        }
    }
}

impl Colormap {
    /// Canonical name, including a `_r` suffix for reversed maps
    pub fn name(&self) -> String {
        let base = COLORMAPS[self.index].0;
        if self.reversed {
            format!("{}_r", base)
        } else {
            base.to_string()
        }
    }

    /// Color at `t`, clamped to [0, 1], as `#rrggbb`
    pub fn interpolate(&self, t: f64) -> String {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };
        let c = COLORMAPS[self.index].1.eval_continuous(t);
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    }
}

/// Resolve a colormap name. Missing or unrecognized names give viridis.
pub fn cmap_to_interpolator(name: Option<&str>) -> Colormap {
    let Some(name) = name else {
        return Colormap::default();
    };
    let (base, reversed) = match name.strip_suffix("_r") {
        Some(base) => (base, true),
        None => (name, false),
    };
    match COLORMAPS.iter().position(|(n, _)| *n == base) {
        Some(index) => Colormap { index, reversed },
        None => {
            tracing::debug!(cmap = name, "unknown colormap, using viridis");
            Colormap::default()
        }
    }
}

/// Sequential scale: linear domain onto a colormap's [0, 1] input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    pub colormap: Colormap,
    pub domain: (f64, f64),
}

impl SequentialScale {
    /// Build a scale whose domain is `[lo, hi]` with either end optionally
    /// overridden; missing ends come from the min/max of `values`.
    pub fn from_values(
        colormap: Colormap,
        values: &[f64],
        lo: Option<f64>,
        hi: Option<f64>,
    ) -> Self {
        let (min, max) = extent(values);
        Self {
            colormap,
            domain: (lo.unwrap_or(min), hi.unwrap_or(max)),
        }
    }

    pub fn apply(&self, value: f64) -> String {
        let (d0, d1) = self.domain;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        self.colormap.interpolate(t)
    }
}

/// Min and max of the finite values, or (0, 0) when there are none
fn extent(values: &[f64]) -> (f64, f64) {
    let mut iter = values.iter().copied().filter(|v| v.is_finite());
    let Some(first) = iter.next() else {
        return (0.0, 0.0);
    };
    iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_viridis() {
        let viridis = cmap_to_interpolator(Some("viridis"));
        assert_eq!(cmap_to_interpolator(None), viridis);
        assert_eq!(cmap_to_interpolator(Some("not_a_cmap")), viridis);
        assert_eq!(viridis.name(), "viridis");
    }

    #[test]
    fn test_known_names_differ() {
        let viridis = cmap_to_interpolator(Some("viridis"));
        let plasma = cmap_to_interpolator(Some("plasma"));
        assert_ne!(viridis, plasma);
        assert_ne!(viridis.interpolate(0.0), plasma.interpolate(0.0));
    }

    #[test]
    fn test_table_size_and_names_unique() {
        assert!(COLORMAPS.len() >= 34);
        for (i, (name, _)) in COLORMAPS.iter().enumerate() {
            assert_eq!(cmap_to_interpolator(Some(*name)).index, i);
        }
    }

    #[test]
    fn test_reversed_suffix() {
        let blues = cmap_to_interpolator(Some("Blues"));
        let blues_r = cmap_to_interpolator(Some("Blues_r"));
        assert_ne!(blues, blues_r);
        assert_eq!(blues_r.name(), "Blues_r");
        assert_eq!(blues.interpolate(0.25), blues_r.interpolate(0.75));
    }

    #[test]
    fn test_interpolate_clamps() {
        let cmap = Colormap::default();
        assert_eq!(cmap.interpolate(-3.0), cmap.interpolate(0.0));
        assert_eq!(cmap.interpolate(7.0), cmap.interpolate(1.0));
        assert!(cmap.interpolate(0.5).starts_with('#'));
        assert_eq!(cmap.interpolate(0.5).len(), 7);
    }

    #[test]
    fn test_scale_domain() {
        let cmap = Colormap::default();
        let scale = SequentialScale::from_values(cmap, &[3.0, 9.0, 5.0], None, None);
        assert_eq!(scale.domain, (3.0, 9.0));
        assert_eq!(scale.apply(9.0), cmap.interpolate(1.0));

        let scale = SequentialScale::from_values(cmap, &[3.0, 9.0], Some(0.0), None);
        assert_eq!(scale.domain, (0.0, 9.0));
    }

    #[test]
    fn test_degenerate_domain_uses_midpoint() {
        let cmap = Colormap::default();
        let scale = SequentialScale::from_values(cmap, &[4.0, 4.0], None, None);
        assert_eq!(scale.apply(4.0), cmap.interpolate(0.5));
    }
}
