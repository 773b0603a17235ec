//! Arc-aware noding: splitting strings of arcs at intersection points
//! while preserving each sub-arc's exact circle.

mod nodable_arc_string;

pub use nodable_arc_string::NodableArcString;
