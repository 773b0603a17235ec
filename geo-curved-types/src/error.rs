use crate::coord_seq::CoordDimensions;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A geometry was constructed with a coordinate count its type does not
    /// allow (e.g. a `CircularString` with an even number of coordinates).
    InvalidCoordinateCount {
        geometry: &'static str,
        count: usize,
    },
    /// A ring of a `CurvePolygon` does not end where it begins.
    UnclosedRing { geometry: &'static str },
    /// Section `index` of a `CompoundCurve` does not begin at the coordinate
    /// where section `index - 1` ends.
    DiscontinuousSections { index: usize },
    /// The children of a collection do not share a coordinate dimension
    /// profile.
    MismatchedDimensions {
        expected: CoordDimensions,
        found: CoordDimensions,
    },
    /// A conversion from an enum to a concrete geometry type found a
    /// different variant than the one requested.
    MismatchedGeometry {
        expected: &'static str,
        found: &'static str,
    },
    /// An operation that is only meaningful on linear geometries was invoked
    /// on a curved geometry.
    UnsupportedOperation {
        operation: &'static str,
        geometry: &'static str,
    },
    /// An angular step or distance tolerance was zero, negative, or NaN.
    NonPositiveTolerance { what: &'static str },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidCoordinateCount { geometry, count } => {
                write!(f, "Invalid number of coordinates ({count}) for {geometry}")
            }
            Error::UnclosedRing { geometry } => {
                write!(f, "Rings of a {geometry} must be closed")
            }
            Error::DiscontinuousSections { index } => {
                write!(
                    f,
                    "Section {index} does not begin where the previous section ends"
                )
            }
            Error::MismatchedDimensions { expected, found } => {
                write!(
                    f,
                    "Expected coordinate dimensions {expected:?}, but found {found:?}"
                )
            }
            Error::MismatchedGeometry { expected, found } => {
                write!(f, "Expected a {expected}, but found a {found}")
            }
            Error::UnsupportedOperation {
                operation,
                geometry,
            } => {
                write!(f, "{operation} is not supported for {geometry}")
            }
            Error::NonPositiveTolerance { what } => {
                write!(f, "{what} must be a positive number")
            }
        }
    }
}
