use num_traits::FloatConst;

use crate::algorithm::arcs::Arcs;
use crate::{
    CircularString, CompoundCurve, Coord, CoordFloat, Curve, CurvePolygon, CurvedGeometry,
    MultiCurve, MultiSurface, SimpleCurve,
};

/// Signed and unsigned area of curved geometries.
///
/// The area of a [`CurvePolygon`] accounts for its arcs exactly: each ring
/// contributes the shoelace sum over its arc endpoints plus the signed
/// circular-segment area of each arc. One-dimensional curves have zero
/// area. Counter-clockwise rings are positive; interior rings wound
/// opposite the exterior subtract naturally.
pub trait Area<T: CoordFloat> {
    fn signed_area(&self) -> T;

    fn unsigned_area(&self) -> T;
}

/// The signed area enclosed by a closed ring, exact in its arcs.
fn ring_signed_area<T: CoordFloat + FloatConst>(ring: &Curve<T>) -> T {
    let two = T::one() + T::one();
    let mut chords: Vec<Coord<T>> = Vec::new();
    let mut segments = T::zero();

    for (i, section) in sections_of(ring).iter().enumerate() {
        match section {
            SimpleCurve::LineString(ls) => {
                for (j, c) in ls.coords().enumerate() {
                    if i == 0 || j > 0 {
                        chords.push(c);
                    }
                }
            }
            SimpleCurve::CircularString(cs) => {
                if i == 0 {
                    if let Some(first) = cs.start_point() {
                        chords.push(first);
                    }
                }
                for arc in cs.arcs() {
                    chords.push(arc.p2());
                    segments = segments + arc.area();
                }
            }
        }
    }

    let mut shoelace = T::zero();
    for w in chords.windows(2) {
        shoelace = shoelace + (w[0].x * w[1].y - w[1].x * w[0].y);
    }
    shoelace / two + segments
}

fn sections_of<T: CoordFloat>(ring: &Curve<T>) -> Vec<SimpleCurve<T>> {
    match ring {
        Curve::LineString(ls) => vec![SimpleCurve::LineString(ls.clone())],
        Curve::CircularString(cs) => vec![SimpleCurve::CircularString(cs.clone())],
        Curve::CompoundCurve(cc) => cc.sections().to_vec(),
    }
}

impl<T: CoordFloat + FloatConst> Area<T> for CurvePolygon<T> {
    fn signed_area(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        ring_signed_area(self.exterior())
            + self
                .interiors()
                .iter()
                .map(ring_signed_area)
                .fold(T::zero(), |acc, a| acc + a)
    }

    fn unsigned_area(&self) -> T {
        self.signed_area().abs()
    }
}

impl<T: CoordFloat + FloatConst> Area<T> for MultiSurface<T> {
    fn signed_area(&self) -> T {
        self.iter()
            .map(Area::signed_area)
            .fold(T::zero(), |acc, a| acc + a)
    }

    fn unsigned_area(&self) -> T {
        self.iter()
            .map(Area::unsigned_area)
            .fold(T::zero(), |acc, a| acc + a)
    }
}

macro_rules! zero_area {
    ($($type:ident),+) => {
        $(
        /// One-dimensional geometries have zero area.
        impl<T: CoordFloat + FloatConst> Area<T> for $type<T> {
            fn signed_area(&self) -> T {
                T::zero()
            }

            fn unsigned_area(&self) -> T {
                T::zero()
            }
        }
        )+
    };
}

zero_area!(CircularString, CompoundCurve, MultiCurve);

impl<T: CoordFloat + FloatConst> Area<T> for CurvedGeometry<T> {
    fn signed_area(&self) -> T {
        match self {
            CurvedGeometry::CurvePolygon(g) => g.signed_area(),
            CurvedGeometry::MultiSurface(g) => g.signed_area(),
            _ => T::zero(),
        }
    }

    fn unsigned_area(&self) -> T {
        match self {
            CurvedGeometry::CurvePolygon(g) => g.unsigned_area(),
            CurvedGeometry::MultiSurface(g) => g.unsigned_area(),
            _ => T::zero(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::LineString;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn curves_have_zero_area() {
        let cs =
            CircularString::try_from(vec![(0., 0.), (1., 1.), (2., 0.), (3., -1.), (4., 0.)])
                .unwrap();
        assert_eq!(cs.signed_area(), 0.0);
        assert_eq!(cs.unsigned_area(), 0.0);
    }

    #[test]
    fn full_disc_from_two_arcs() {
        // a radius-2 circle traversed clockwise
        let ring = CircularString::try_from(vec![
            (0.0, 0.0),
            (2.0, 2.0),
            (4.0, 0.0),
            (2.0, -2.0),
            (0.0, 0.0),
        ])
        .unwrap();
        let polygon = CurvePolygon::new(ring.into(), vec![]).unwrap();
        assert_relative_eq!(polygon.signed_area(), -4.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(polygon.unsigned_area(), 4.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn compound_ring_mixes_chords_and_segments() {
        // a CCW unit semicircle capped by its chord
        let arc = CircularString::try_from(vec![(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]).unwrap();
        let chord = LineString::from(vec![(-1.0, 0.0), (1.0, 0.0)]);
        let ring = CompoundCurve::new(vec![arc.into(), chord.into()]).unwrap();
        let polygon = CurvePolygon::new(ring.into(), vec![]).unwrap();
        assert_relative_eq!(polygon.signed_area(), PI / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn interior_ring_subtracts() {
        // a clockwise square holding a clockwise-wound circular hole;
        // opposite winding is the caller's concern, so both contribute
        // their signed areas
        let shell = LineString::from(vec![
            (-10.0, -10.0),
            (-10.0, 10.0),
            (10.0, 10.0),
            (10.0, -10.0),
            (-10.0, -10.0),
        ]);
        let hole = CircularString::try_from(vec![
            (-1.0, 0.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (0.0, -1.0),
            (-1.0, 0.0),
        ])
        .unwrap();
        let polygon = CurvePolygon::new(
            Curve::LineString(shell),
            vec![Curve::CircularString(hole)],
        )
        .unwrap();
        // shell is CW (negative 400), hole is CW (negative pi)
        assert_relative_eq!(polygon.signed_area(), -400.0 - PI, max_relative = 1e-12);
    }
}
