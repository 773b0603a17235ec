use num_traits::FloatConst;

use crate::{
    CircularString, CompoundCurve, CoordFloat, Curve, CurvePolygon, CurvedGeometry, LineString,
    MultiCurve, MultiSurface,
};

/// The topological dimension of a geometry or of its boundary, with a
/// distinct value for [`empty`](HasDimensions::is_empty) geometries.
///
/// The ordering is meaningful: `Empty` sorts below `ZeroDimensional`,
/// which sorts below the others, so the dimensionality of a collection is
/// the maximum over its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd)]
pub enum Dimensions {
    /// No dimensionality at all: a geometry with no coordinates, such as
    /// a `MultiCurve` with no members. A point has coordinates and is
    /// `ZeroDimensional` instead.
    Empty,
    /// Points, and the boundary of an open curve
    ZeroDimensional,
    /// Curves, and the boundary of a surface
    OneDimensional,
    /// Surfaces
    TwoDimensional,
}

/// Operate on the dimensionality of geometries.
pub trait HasDimensions {
    /// Some geometries can have zero coordinates - we call these `empty`.
    fn is_empty(&self) -> bool;

    /// The dimensions of the geometry: every curve is lineal
    /// (`OneDimensional`), every curve polygon is `TwoDimensional`.
    fn dimensions(&self) -> Dimensions;

    /// The dimensions of the geometry's boundary. An open curve is bounded
    /// by its two endpoints (`ZeroDimensional`); a closed curve has an
    /// empty boundary; a curve polygon is bounded by its rings
    /// (`OneDimensional`).
    fn boundary_dimensions(&self) -> Dimensions;
}

macro_rules! impl_curve_dimensions {
    ($($type:ident),+) => {
        $(
        impl<T: CoordFloat + FloatConst> HasDimensions for $type<T> {
            fn is_empty(&self) -> bool {
                $type::is_empty(self)
            }

            fn dimensions(&self) -> Dimensions {
                if self.is_empty() {
                    Dimensions::Empty
                } else {
                    Dimensions::OneDimensional
                }
            }

            fn boundary_dimensions(&self) -> Dimensions {
                if self.is_closed() {
                    Dimensions::Empty
                } else {
                    Dimensions::ZeroDimensional
                }
            }
        }
        )+
    };
}

impl_curve_dimensions!(LineString, CircularString, CompoundCurve, Curve, MultiCurve);

impl<T: CoordFloat + FloatConst> HasDimensions for CurvePolygon<T> {
    fn is_empty(&self) -> bool {
        CurvePolygon::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::TwoDimensional
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::OneDimensional
        }
    }
}

impl<T: CoordFloat + FloatConst> HasDimensions for MultiSurface<T> {
    fn is_empty(&self) -> bool {
        MultiSurface::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::TwoDimensional
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::OneDimensional
        }
    }
}

impl<T: CoordFloat + FloatConst> HasDimensions for CurvedGeometry<T> {
    fn is_empty(&self) -> bool {
        CurvedGeometry::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        match self {
            CurvedGeometry::CircularString(g) => g.dimensions(),
            CurvedGeometry::CompoundCurve(g) => g.dimensions(),
            CurvedGeometry::CurvePolygon(g) => g.dimensions(),
            CurvedGeometry::MultiCurve(g) => g.dimensions(),
            CurvedGeometry::MultiSurface(g) => g.dimensions(),
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        match self {
            CurvedGeometry::CircularString(g) => g.boundary_dimensions(),
            CurvedGeometry::CompoundCurve(g) => g.boundary_dimensions(),
            CurvedGeometry::CurvePolygon(g) => g.boundary_dimensions(),
            CurvedGeometry::MultiCurve(g) => g.boundary_dimensions(),
            CurvedGeometry::MultiSurface(g) => g.boundary_dimensions(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn curves_are_lineal() {
        let cs =
            CircularString::try_from(vec![(0., 0.), (1., 1.), (2., 0.), (3., -1.), (4., 0.)])
                .unwrap();
        assert_eq!(cs.dimensions(), Dimensions::OneDimensional);
        assert_eq!(cs.boundary_dimensions(), Dimensions::ZeroDimensional);

        let closed = CircularString::try_from(vec![
            (-1.0, 0.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (0.0, -1.0),
            (-1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(closed.boundary_dimensions(), Dimensions::Empty);

        let empty = CircularString::<f64>::empty(Default::default());
        assert_eq!(empty.dimensions(), Dimensions::Empty);
    }

    #[test]
    fn multi_curve_closedness_drives_boundary() {
        let open = CircularString::try_from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
        let mc = MultiCurve::new(vec![open.into()]).unwrap();
        assert_eq!(mc.dimensions(), Dimensions::OneDimensional);
        assert_eq!(mc.boundary_dimensions(), Dimensions::ZeroDimensional);
    }

    #[test]
    fn curve_polygon_is_areal() {
        let ring = CircularString::try_from(vec![
            (0.0, 0.0),
            (2.0, 2.0),
            (4.0, 0.0),
            (2.0, -2.0),
            (0.0, 0.0),
        ])
        .unwrap();
        let polygon = CurvePolygon::new(ring.into(), vec![]).unwrap();
        assert_eq!(polygon.dimensions(), Dimensions::TwoDimensional);
        assert_eq!(polygon.boundary_dimensions(), Dimensions::OneDimensional);
    }
}
