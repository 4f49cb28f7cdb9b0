//! Alias resolution for matplotlib-style keyword dictionaries.
//!
//! Both functions copy their input; the caller's dictionary is never touched.

use crate::types::RawStyle;

/// Key holding the resolved node fill after normalization
pub const FILL_KEY: &str = "_fill";

/// Node fill aliases, highest priority first
const FILL_ALIASES: [&str; 3] = ["facecolor", "color", "c"];

/// Canonicalize an edge style: `lw` -> `linewidth`, `ls` -> `linestyle`.
pub fn normalize_edge(raw: &RawStyle) -> RawStyle {
    let mut style = raw.clone();
    resolve_alias(&mut style, "lw", "linewidth");
    resolve_alias(&mut style, "ls", "linestyle");
    style
}

/// Canonicalize a node style.
///
/// The highest-priority of `facecolor`, `color` and `c` becomes `_fill` and
/// the others are dropped unread. `size` -> `s`, `edgecolors` -> `edgecolor`.
pub fn normalize_node(raw: &RawStyle) -> RawStyle {
    let mut style = raw.clone();
    let fill = FILL_ALIASES.iter().find_map(|key| raw.get(*key).cloned());
    for key in FILL_ALIASES {
        style.remove(key);
    }
    if let Some(fill) = fill {
        style.insert(FILL_KEY.to_string(), fill);
    }
    resolve_alias(&mut style, "size", "s");
    resolve_alias(&mut style, "edgecolors", "edgecolor");
    style
}

/// Move `alias` onto `canonical` unless `canonical` is already set. The alias is always removed.
fn resolve_alias(style: &mut RawStyle, alias: &str, canonical: &str) {
    if let Some(value) = style.remove(alias) {
        style.entry(canonical).or_insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawStyle {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_edge_aliases() {
        let input = raw(json!({"lw": 3, "ls": "--", "cmap": "plasma"}));
        let style = normalize_edge(&input);
        assert_eq!(style["linewidth"], json!(3));
        assert_eq!(style["linestyle"], json!("--"));
        assert_eq!(style["cmap"], json!("plasma"));
        assert!(!style.contains_key("lw"));
        assert!(!style.contains_key("ls"));
        // input untouched
        assert_eq!(input["lw"], json!(3));
    }

    #[test]
    fn test_canonical_wins_over_alias() {
        let style = normalize_edge(&raw(json!({"lw": 3, "linewidth": 1, "ls": ":", "linestyle": "-"})));
        assert_eq!(style["linewidth"], json!(1));
        assert_eq!(style["linestyle"], json!("-"));
        assert!(!style.contains_key("lw"));
        assert!(!style.contains_key("ls"));
    }

    #[test]
    fn test_edge_normalization_idempotent() {
        let input = raw(json!({"lw": [1, 2], "ls": "dotted", "color": "red", "array": [1.0, 2.0]}));
        let once = normalize_edge(&input);
        assert_eq!(normalize_edge(&once), once);
    }

    #[test]
    fn test_node_fill_priority() {
        let style = normalize_node(&raw(json!({"c": "red", "color": "blue", "facecolor": "green"})));
        assert_eq!(style[FILL_KEY], json!("green"));
        for key in FILL_ALIASES {
            assert!(!style.contains_key(key));
        }

        let style = normalize_node(&raw(json!({"c": "red", "color": "blue"})));
        assert_eq!(style[FILL_KEY], json!("blue"));

        let style = normalize_node(&raw(json!({"c": "red"})));
        assert_eq!(style[FILL_KEY], json!("red"));

        let style = normalize_node(&raw(json!({"s": 5})));
        assert!(!style.contains_key(FILL_KEY));
    }

    #[test]
    fn test_node_size_and_edgecolor_aliases() {
        let style = normalize_node(&raw(json!({"size": 40, "edgecolors": "k", "vmin": 0})));
        assert_eq!(style["s"], json!(40));
        assert_eq!(style["edgecolor"], json!("k"));
        assert_eq!(style["vmin"], json!(0));

        let style = normalize_node(&raw(json!({"size": 40, "s": 10})));
        assert_eq!(style["s"], json!(10));
        assert!(!style.contains_key("size"));
    }

    #[test]
    fn test_node_normalization_idempotent() {
        let input = raw(json!({"c": [1.0, 2.0], "size": 3, "edgecolors": "red"}));
        let once = normalize_node(&input);
        assert_eq!(normalize_node(&once), once);
    }
}
