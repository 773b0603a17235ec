use crate::{Coord, CoordFloat};
use num_traits::NumCast;

/// The rotational sense of an ordered point triple.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    /// The orientation of the same triple traversed in the opposite
    /// direction.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Which way the path `p -> q -> r` turns at `q`: left
/// (counter-clockwise), right (clockwise), or not at all (collinear).
///
/// The sign comes from an adaptive-precision predicate, so it is exact
/// even on nearly-collinear triples where an ordinary floating-point
/// cross product rounds to the wrong side or to zero. Arc derivation
/// trusts this sign for everything directional; nothing else in the crate
/// decides an orientation.
pub fn orientation_index<T: CoordFloat>(p: Coord<T>, q: Coord<T>, r: Coord<T>) -> Orientation {
    use robust::{orient2d, Coord as RobustCoord};

    let orientation = orient2d(
        RobustCoord {
            x: <f64 as NumCast>::from(p.x).unwrap(),
            y: <f64 as NumCast>::from(p.y).unwrap(),
        },
        RobustCoord {
            x: <f64 as NumCast>::from(q.x).unwrap(),
            y: <f64 as NumCast>::from(q.y).unwrap(),
        },
        RobustCoord {
            x: <f64 as NumCast>::from(r.x).unwrap(),
            y: <f64 as NumCast>::from(r.y).unwrap(),
        },
    );

    if orientation < 0. {
        Orientation::Clockwise
    } else if orientation > 0. {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_curved_types::coord;

    #[test]
    fn orientation_of_simple_triples() {
        assert_eq!(
            orientation_index(
                coord! { x: 0.0, y: -5.0 },
                coord! { x: 5.0, y: 0.0 },
                coord! { x: 0.0, y: 5.0 }
            ),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation_index(
                coord! { x: -1.0, y: 0.0 },
                coord! { x: 0.0, y: 1.0 },
                coord! { x: 1.0, y: 0.0 }
            ),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation_index(
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 1.0, y: 2.0 },
                coord! { x: 2.0, y: 4.0 }
            ),
            Orientation::Collinear
        );
    }

    #[test]
    fn near_collinear_triple_is_resolved() {
        let p = coord! { x: 0.5, y: 0.5 };
        let q = coord! { x: 12.0, y: 12.0 };
        let r = coord! { x: 24.0, y: 24.0 + 1e-13 };
        assert_eq!(orientation_index(p, q, r), Orientation::CounterClockwise);
        assert_eq!(orientation_index(r, q, p), Orientation::Clockwise);
    }
}
