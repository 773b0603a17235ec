//! The `geo-curved` crate provides the circular-arc geometry core of a 2D
//! geometry engine: a three-point arc primitive and the algorithms that
//! convert between curved and linear geometries.
//!
//! # Types
//!
//! - **[`CircularArc`]**: three control points on the same circle, with
//!   lazily derived center, radius, and orientation
//!
//! The curved and linear geometry types ([`CircularString`],
//! [`CompoundCurve`], [`CurvePolygon`], [`MultiCurve`], [`MultiSurface`],
//! and their linear counterparts) are re-exported from the
//! [`geo-curved-types`](geo_curved_types) crate.
//!
//! # Algorithms
//!
//! ## Conversion
//!
//! - **[`Linearize`]**: Convert a curved geometry to its piecewise-linear
//!   counterpart, bounding either the angular step or the deviation
//!   (sagitta) from the true arcs
//! - **[`ToCurve`]**: Recognize circular arcs in a polyline and return an
//!   equivalent curved geometry
//!
//! ## Noding
//!
//! - **[`NodableArcString`](noding::NodableArcString)**: Split a string of
//!   arcs at intersection points while preserving each sub-arc's exact
//!   circle
//!
//! ## Measures
//!
//! - **[`Length`]**: Arc-exact length of a curve
//! - **[`Area`]**: Signed and unsigned area of a curve polygon
//! - **[`BoundingRect`]**: Arc-aware axis-aligned envelope
//! - **[`HasDimensions`]**: Topological and boundary dimensionality
//!
//! # Example
//!
//! ```
//! use geo_curved::{CircularString, Linearize};
//!
//! // the upper half of the unit circle
//! let cs = CircularString::try_from(vec![(-1.0, 0.0), (0.0, 1.0), (1.0, 0.0)]).unwrap();
//!
//! let ls = cs.linearize(std::f64::consts::FRAC_PI_2).unwrap();
//! assert_eq!(ls.num_coords(), 3);
//! ```

pub use geo_curved_types::*;

pub mod algorithm;
pub mod noding;

mod circular_arc;

pub use crate::algorithm::angles;
pub use crate::algorithm::area::Area;
pub use crate::algorithm::arcs::Arcs;
pub use crate::algorithm::bounding_rect::BoundingRect;
pub use crate::algorithm::curve_builder::ToCurve;
pub use crate::algorithm::dimensions::{Dimensions, HasDimensions};
pub use crate::algorithm::length::Length;
pub use crate::algorithm::linearize::Linearize;
pub use crate::algorithm::orientation::{orientation_index, Orientation};
pub use crate::circular_arc::CircularArc;
