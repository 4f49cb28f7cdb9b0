//! Class names and fixed styling constants.

/// Element classes downstream tooling selects on
pub struct Classes;

impl Classes {
    pub const AXIS: &'static str = "axis";
    pub const NODE: &'static str = "node";
    pub const EDGE: &'static str = "edge";
    pub const AXIS_LABEL: &'static str = "axis-label";
}

/// Axis lines are not customizable
pub struct AxisStroke;

impl AxisStroke {
    pub const COLOR: &'static str = "black";
    pub const WIDTH: f64 = 1.5;
    pub const OPACITY: f64 = 0.5;
}

/// Text alignment values produced for axis labels
pub struct Anchor;

impl Anchor {
    pub const START: &'static str = "start";
    pub const MIDDLE: &'static str = "middle";
    pub const END: &'static str = "end";
}

pub struct Baseline;

impl Baseline {
    pub const AUTO: &'static str = "auto";
    pub const MIDDLE: &'static str = "middle";
    pub const HANGING: &'static str = "hanging";
}
