//! The `geo-curved-types` crate provides primitive data types for geometries
//! whose segments are true circular arcs rather than straight chords.
//!
//! # Types
//!
//! - **[`Coord`]**: A two-dimensional coordinate. All geometry types are composed of [`Coord`]s.
//! - **[`CoordSeq`]**: An ordered sequence of coordinates with a uniform dimension profile
//!   (optional Z and M ordinates; see [`CoordDimensions`]).
//! - **[`LineString`]**: A series of contiguous straight line segments
//! - **[`CircularString`]**: A series of contiguous circular arcs, each defined by three points
//! - **[`CompoundCurve`]**: A continuous path of straight and circular sections
//! - **[`CurvePolygon`]**: A bounded area whose rings may be straight, circular, or mixed
//! - **[`MultiCurve`]**: A collection of [`Curve`]s
//! - **[`MultiSurface`]**: A collection of [`CurvePolygon`]s
//! - **[`Curve`]**: An enumeration of the curve types usable as a ring or collection element
//! - **[`CurvedGeometry`]**: An enumeration of all curved geometry types
//! - **[`LinearGeometry`]**: An enumeration of the linear geometry types produced by
//!   linearizing a curved geometry
//!
//! # Semantics
//!
//! The curved types follow the SQL/MM curve model layered on top of the
//! [OGC Simple Feature Access][OGC-SFA] geometry model, so geometries
//! round-trip cleanly against the engines that speak it (PostGIS, GEOS,
//! GDAL, SQL Server).
//!
//! Operations that are only meaningful on linear geometries (topological
//! predicates, overlay, buffering, and friends) are rejected on curved
//! geometries with [`Error::UnsupportedOperation`]. Callers wanting those
//! operations linearize first; see the `geo-curved` crate.
//!
//! [OGC-SFA]: //www.ogc.org/standards/sfa

use core::fmt::Debug;
use num_traits::{Float, Num, NumCast};

/// The type of an x or y value of a coordinate.
///
/// Floats (`f32` and `f64`) and Integers (`u8`, `i32` etc.) implement this.
pub trait CoordNum: Num + Copy + NumCast + PartialOrd + Debug {}
impl<T: Num + Copy + NumCast + PartialOrd + Debug> CoordNum for T {}

/// The type of a coordinate value that can participate in arc computations.
pub trait CoordFloat: CoordNum + Float {}
impl<T: CoordNum + Float> CoordFloat for T {}

mod circular_string;
mod compound_curve;
mod coord;
mod coord_seq;
mod curve;
mod curve_polygon;
mod error;
mod line_string;
mod multi_curve;
mod multi_line_string;
mod multi_polygon;
mod multi_surface;
mod polygon;
mod rect;
mod unsupported;

pub use crate::circular_string::CircularString;
pub use crate::compound_curve::{CompoundCurve, SimpleCurve};
pub use crate::coord::Coord;
pub use crate::coord_seq::{CoordDimensions, CoordSeq, CoordZM};
pub use crate::curve::{Curve, CurvedGeometry, LinearGeometry};
pub use crate::curve_polygon::CurvePolygon;
pub use crate::error::Error;
pub use crate::line_string::LineString;
pub use crate::multi_curve::MultiCurve;
pub use crate::multi_line_string::MultiLineString;
pub use crate::multi_polygon::MultiPolygon;
pub use crate::multi_surface::MultiSurface;
pub use crate::polygon::Polygon;
pub use crate::rect::Rect;
