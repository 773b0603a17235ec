use crate::{
    CircularString, CompoundCurve, Coord, CoordDimensions, CoordNum, CoordSeq, CurvePolygon,
    Error, LineString, MultiCurve, MultiLineString, MultiPolygon, MultiSurface, Polygon,
};

/// An enum over the one-dimensional path types: the element type of a
/// [`MultiCurve`] and the ring type of a [`CurvePolygon`].
///
/// All curve types can be converted to a `Curve` member using `.into()`,
/// and implement `TryFrom` in order to convert back from enum members.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve<T: CoordNum> {
    LineString(LineString<T>),
    CircularString(CircularString<T>),
    CompoundCurve(CompoundCurve<T>),
}

impl<T: CoordNum> Curve<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            Curve::LineString(g) => g.is_empty(),
            Curve::CircularString(g) => g.is_empty(),
            Curve::CompoundCurve(g) => g.is_empty(),
        }
    }

    pub fn dims(&self) -> CoordDimensions {
        match self {
            Curve::LineString(g) => g.dims(),
            Curve::CircularString(g) => g.dims(),
            Curve::CompoundCurve(g) => g.dims(),
        }
    }

    /// The number of distinct path coordinates.
    pub fn num_coords(&self) -> usize {
        match self {
            Curve::LineString(g) => g.num_coords(),
            Curve::CircularString(g) => g.num_coords(),
            Curve::CompoundCurve(g) => g.num_coords(),
        }
    }

    pub fn start_point(&self) -> Option<Coord<T>> {
        match self {
            Curve::LineString(g) => g.start_point(),
            Curve::CircularString(g) => g.start_point(),
            Curve::CompoundCurve(g) => g.start_point(),
        }
    }

    pub fn end_point(&self) -> Option<Coord<T>> {
        match self {
            Curve::LineString(g) => g.end_point(),
            Curve::CircularString(g) => g.end_point(),
            Curve::CompoundCurve(g) => g.end_point(),
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            Curve::LineString(g) => g.is_closed(),
            Curve::CircularString(g) => g.is_closed(),
            Curve::CompoundCurve(g) => g.is_closed(),
        }
    }

    /// The path coordinates in order, without duplicated shared endpoints.
    pub fn coordinates(&self) -> CoordSeq<T> {
        match self {
            Curve::LineString(g) => g.coord_seq().clone(),
            Curve::CircularString(g) => g.coord_seq().clone(),
            Curve::CompoundCurve(g) => g.coordinates(),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Curve::LineString(g) => Curve::LineString(g.reverse()),
            Curve::CircularString(g) => Curve::CircularString(g.reverse()),
            Curve::CompoundCurve(g) => Curve::CompoundCurve(g.reverse()),
        }
    }

    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        match (self, other) {
            (Curve::LineString(a), Curve::LineString(b)) => a.equals_exact(b, tol),
            (Curve::CircularString(a), Curve::CircularString(b)) => a.equals_exact(b, tol),
            (Curve::CompoundCurve(a), Curve::CompoundCurve(b)) => a.equals_exact(b, tol),
            _ => false,
        }
    }

    /// The name of the inner type, as it appears in error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Curve::LineString(_) => "LineString",
            Curve::CircularString(_) => "CircularString",
            Curve::CompoundCurve(_) => "CompoundCurve",
        }
    }
}

/// An enum over every curved geometry type.
///
/// This is the dispatch surface the surrounding engine sees when a parsed
/// geometry may be any of the curved variants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurvedGeometry<T: CoordNum> {
    CircularString(CircularString<T>),
    CompoundCurve(CompoundCurve<T>),
    CurvePolygon(CurvePolygon<T>),
    MultiCurve(MultiCurve<T>),
    MultiSurface(MultiSurface<T>),
}

impl<T: CoordNum> CurvedGeometry<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            CurvedGeometry::CircularString(g) => g.is_empty(),
            CurvedGeometry::CompoundCurve(g) => g.is_empty(),
            CurvedGeometry::CurvePolygon(g) => g.is_empty(),
            CurvedGeometry::MultiCurve(g) => g.is_empty(),
            CurvedGeometry::MultiSurface(g) => g.is_empty(),
        }
    }

    pub fn num_coords(&self) -> usize {
        match self {
            CurvedGeometry::CircularString(g) => g.num_coords(),
            CurvedGeometry::CompoundCurve(g) => g.num_coords(),
            CurvedGeometry::CurvePolygon(g) => g.num_coords(),
            CurvedGeometry::MultiCurve(g) => g.num_coords(),
            CurvedGeometry::MultiSurface(g) => g.num_coords(),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            CurvedGeometry::CircularString(g) => CurvedGeometry::CircularString(g.reverse()),
            CurvedGeometry::CompoundCurve(g) => CurvedGeometry::CompoundCurve(g.reverse()),
            CurvedGeometry::CurvePolygon(g) => CurvedGeometry::CurvePolygon(g.reverse()),
            CurvedGeometry::MultiCurve(g) => CurvedGeometry::MultiCurve(g.reverse()),
            CurvedGeometry::MultiSurface(g) => CurvedGeometry::MultiSurface(g.reverse()),
        }
    }

    pub fn equals_exact(&self, other: &Self, tol: T) -> bool {
        match (self, other) {
            (CurvedGeometry::CircularString(a), CurvedGeometry::CircularString(b)) => {
                a.equals_exact(b, tol)
            }
            (CurvedGeometry::CompoundCurve(a), CurvedGeometry::CompoundCurve(b)) => {
                a.equals_exact(b, tol)
            }
            (CurvedGeometry::CurvePolygon(a), CurvedGeometry::CurvePolygon(b)) => {
                a.equals_exact(b, tol)
            }
            (CurvedGeometry::MultiCurve(a), CurvedGeometry::MultiCurve(b)) => {
                a.equals_exact(b, tol)
            }
            (CurvedGeometry::MultiSurface(a), CurvedGeometry::MultiSurface(b)) => {
                a.equals_exact(b, tol)
            }
            _ => false,
        }
    }

    /// The name of the inner type, as it appears in error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            CurvedGeometry::CircularString(_) => "CircularString",
            CurvedGeometry::CompoundCurve(_) => "CompoundCurve",
            CurvedGeometry::CurvePolygon(_) => "CurvePolygon",
            CurvedGeometry::MultiCurve(_) => "MultiCurve",
            CurvedGeometry::MultiSurface(_) => "MultiSurface",
        }
    }
}

/// An enum over the linear geometry types a curved geometry linearizes to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinearGeometry<T: CoordNum> {
    LineString(LineString<T>),
    Polygon(Polygon<T>),
    MultiLineString(MultiLineString<T>),
    MultiPolygon(MultiPolygon<T>),
}

impl<T: CoordNum> LinearGeometry<T> {
    /// The name of the inner type, as it appears in error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            LinearGeometry::LineString(_) => "LineString",
            LinearGeometry::Polygon(_) => "Polygon",
            LinearGeometry::MultiLineString(_) => "MultiLineString",
            LinearGeometry::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

macro_rules! from_impl {
    ($enum:ident, $($type:ident),+) => {
        $(
        impl<T: CoordNum> From<$type<T>> for $enum<T> {
            fn from(g: $type<T>) -> Self {
                $enum::$type(g)
            }
        }
        )+
    };
}

from_impl!(Curve, LineString, CircularString, CompoundCurve);
from_impl!(
    CurvedGeometry,
    CircularString,
    CompoundCurve,
    CurvePolygon,
    MultiCurve,
    MultiSurface
);
from_impl!(
    LinearGeometry,
    LineString,
    Polygon,
    MultiLineString,
    MultiPolygon
);

macro_rules! try_from_impl {
    ($enum:ident, $($type:ident),+) => {
        $(
        /// Convert the enum into its inner type.
        ///
        /// Fails if the enum case does not match the type you are trying to
        /// convert it to.
        impl<T: CoordNum> TryFrom<$enum<T>> for $type<T> {
            type Error = Error;

            fn try_from(g: $enum<T>) -> Result<Self, Error> {
                match g {
                    $enum::$type(g) => Ok(g),
                    other => Err(Error::MismatchedGeometry {
                        expected: stringify!($type),
                        found: other.type_name(),
                    }),
                }
            }
        }
        )+
    };
}

try_from_impl!(Curve, LineString, CircularString, CompoundCurve);
try_from_impl!(
    CurvedGeometry,
    CircularString,
    CompoundCurve,
    CurvePolygon,
    MultiCurve,
    MultiSurface
);
try_from_impl!(
    LinearGeometry,
    LineString,
    Polygon,
    MultiLineString,
    MultiPolygon
);
