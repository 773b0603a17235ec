/// Extended-precision orientation predicate.
pub mod orientation;

/// Angle arithmetic on circles: normalization, orientation-signed
/// differences, midpoint angles.
pub mod angles;

/// Iterate over the arcs of a [`CircularString`](crate::CircularString).
pub mod arcs;

/// Point-to-segment distance.
pub mod distance;

/// Convert curved geometries to their piecewise-linear counterparts.
pub mod linearize;

/// Recognize circular arcs in linear geometries.
pub mod curve_builder;

/// Arc-exact curve length.
pub mod length;

/// Signed and unsigned area of curved surfaces.
pub mod area;

/// Arc-aware axis-aligned envelopes.
pub mod bounding_rect;

/// Topological and boundary dimensionality.
pub mod dimensions;
