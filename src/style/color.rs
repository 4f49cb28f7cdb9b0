//! Translation of matplotlib color strings into SVG paint values.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_CYCLE: Regex = Regex::new(r"^C(\d)$").unwrap();
    static ref RE_GREY_LEVEL: Regex = Regex::new(r"^(?:0(?:\.\d+)?|1(?:\.0*)?|\.\d+)$").unwrap();
}

/// matplotlib's default property cycle (tab10)
const TAB10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// matplotlib single-letter base colors
const BASE_COLORS: [(&str, &str); 8] = [
    ("b", "#0000ff"),
    ("g", "#008000"),
    ("r", "#ff0000"),
    ("c", "#00bfbf"),
    ("m", "#bf00bf"),
    ("y", "#bfbf00"),
    ("k", "#000000"),
    ("w", "#ffffff"),
];

/// Convert a color string to something SVG understands.
///
/// Single-letter base colors and `C0`..`C9` map to their matplotlib values,
/// and grey levels such as `"0.75"` map to a grey hex. CSS names and hex
/// strings pass through unchanged.
pub fn css_color(color: &str) -> String {
    let trimmed = color.trim();
    if let Some((_, hex)) = BASE_COLORS.iter().find(|(name, _)| *name == trimmed) {
        return hex.to_string();
    }
    if let Some(caps) = RE_CYCLE.captures(trimmed) {
        let index: usize = caps[1].parse().unwrap_or(0);
        return TAB10[index].to_string();
    }
    if RE_GREY_LEVEL.is_match(trimmed) {
        if let Ok(level) = trimmed.parse::<f64>() {
            let v = (level * 255.0).round() as u8;
            return format!("#{:02x}{:02x}{:02x}", v, v, v);
        }
    }
    color.to_string()
}
