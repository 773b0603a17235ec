use num_traits::FloatConst;

use crate::algorithm::arcs::Arcs;
use crate::algorithm::distance::point_distance;
use crate::{
    CircularString, CompoundCurve, CoordFloat, Curve, CurvePolygon, CurvedGeometry, LineString,
    MultiCurve, MultiSurface, SimpleCurve,
};

/// The length of a curve, measuring each arc along its circle rather
/// than along its chord.
///
/// # Examples
///
/// ```
/// use geo_curved::{CircularString, Length};
///
/// // two half circles of radius 1
/// let cs = CircularString::try_from(vec![
///     (0.0, 0.0),
///     (1.0, 1.0),
///     (2.0, 0.0),
///     (3.0, -1.0),
///     (4.0, 0.0),
/// ])
/// .unwrap();
/// assert!((cs.length() - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
pub trait Length<T: CoordFloat> {
    fn length(&self) -> T;
}

impl<T: CoordFloat> Length<T> for LineString<T> {
    fn length(&self) -> T {
        let seq = self.coord_seq();
        (1..seq.len())
            .map(|i| point_distance(seq.coord_at(i - 1), seq.coord_at(i)))
            .fold(T::zero(), |acc, d| acc + d)
    }
}

impl<T: CoordFloat + FloatConst> Length<T> for CircularString<T> {
    fn length(&self) -> T {
        self.arcs()
            .map(|arc| arc.length())
            .fold(T::zero(), |acc, d| acc + d)
    }
}

impl<T: CoordFloat + FloatConst> Length<T> for SimpleCurve<T> {
    fn length(&self) -> T {
        match self {
            SimpleCurve::LineString(g) => g.length(),
            SimpleCurve::CircularString(g) => g.length(),
        }
    }
}

impl<T: CoordFloat + FloatConst> Length<T> for CompoundCurve<T> {
    fn length(&self) -> T {
        self.sections()
            .iter()
            .map(Length::length)
            .fold(T::zero(), |acc, d| acc + d)
    }
}

impl<T: CoordFloat + FloatConst> Length<T> for Curve<T> {
    fn length(&self) -> T {
        match self {
            Curve::LineString(g) => g.length(),
            Curve::CircularString(g) => g.length(),
            Curve::CompoundCurve(g) => g.length(),
        }
    }
}

impl<T: CoordFloat + FloatConst> Length<T> for MultiCurve<T> {
    fn length(&self) -> T {
        self.iter()
            .map(Length::length)
            .fold(T::zero(), |acc, d| acc + d)
    }
}

/// The perimeter: the length of the exterior ring plus the lengths of all
/// interior rings.
impl<T: CoordFloat + FloatConst> Length<T> for CurvePolygon<T> {
    fn length(&self) -> T {
        self.exterior().length()
            + self
                .interiors()
                .iter()
                .map(Length::length)
                .fold(T::zero(), |acc, d| acc + d)
    }
}

impl<T: CoordFloat + FloatConst> Length<T> for MultiSurface<T> {
    fn length(&self) -> T {
        self.iter()
            .map(Length::length)
            .fold(T::zero(), |acc, d| acc + d)
    }
}

impl<T: CoordFloat + FloatConst> Length<T> for CurvedGeometry<T> {
    fn length(&self) -> T {
        match self {
            CurvedGeometry::CircularString(g) => g.length(),
            CurvedGeometry::CompoundCurve(g) => g.length(),
            CurvedGeometry::CurvePolygon(g) => g.length(),
            CurvedGeometry::MultiCurve(g) => g.length(),
            CurvedGeometry::MultiSurface(g) => g.length(),
        }
    }
}
