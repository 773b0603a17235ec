use num_traits::FloatConst;

use crate::algorithm::{angles, arcs::Arcs};
use crate::{
    CircularArc, CircularString, CompoundCurve, CoordFloat, Curve, CurvePolygon, CurvedGeometry,
    LineString, MultiCurve, MultiSurface, Rect, SimpleCurve,
};

/// The smallest axis-aligned [`Rect`] containing a geometry, or `None`
/// when the geometry is empty.
///
/// Envelopes are arc-aware: an arc that crosses an axis extreme of its
/// circle bulges beyond its control points, and the envelope accounts for
/// it.
///
/// # Examples
///
/// ```
/// use geo_curved::{BoundingRect, CircularString};
///
/// // a half circle bulging up to y = 100
/// let cs = CircularString::try_from(vec![(0.0, 0.0), (100.0, 100.0), (200.0, 0.0)]).unwrap();
/// let rect = cs.bounding_rect().unwrap();
/// assert_eq!(rect.min(), geo_curved::coord! { x: 0.0, y: 0.0 });
/// assert_eq!(rect.max(), geo_curved::coord! { x: 200.0, y: 100.0 });
/// ```
pub trait BoundingRect<T: CoordFloat> {
    fn bounding_rect(&self) -> Option<Rect<T>>;
}

/// The envelope of a single arc: its control points, expanded by every
/// axis extreme of its circle that lies within its span.
fn arc_bounding_rect<T: CoordFloat + FloatConst>(arc: &CircularArc<'_, T>) -> Rect<T> {
    let mut rect = Rect::new(arc.p0(), arc.p2());
    rect.expand_to_include(arc.p1());
    if !arc.is_linear() {
        let center = arc.center();
        let radius = arc.radius();
        for theta in [
            T::zero(),
            T::FRAC_PI_2(),
            T::PI(),
            -T::FRAC_PI_2(),
        ] {
            if arc.contains_angle(theta) {
                rect.expand_to_include(angles::point_at_angle(center, radius, theta));
            }
        }
    }
    rect
}

fn merge<T: CoordFloat>(rects: impl Iterator<Item = Option<Rect<T>>>) -> Option<Rect<T>> {
    rects
        .flatten()
        .reduce(|acc, r| acc.merged(&r))
}

impl<T: CoordFloat> BoundingRect<T> for LineString<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        let mut coords = self.coords();
        let first = coords.next()?;
        let mut rect = Rect::new(first, first);
        for c in coords {
            rect.expand_to_include(c);
        }
        Some(rect)
    }
}

impl<T: CoordFloat + FloatConst> BoundingRect<T> for CircularString<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        merge(self.arcs().map(|arc| Some(arc_bounding_rect(&arc))))
    }
}

impl<T: CoordFloat + FloatConst> BoundingRect<T> for SimpleCurve<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        match self {
            SimpleCurve::LineString(g) => g.bounding_rect(),
            SimpleCurve::CircularString(g) => g.bounding_rect(),
        }
    }
}

impl<T: CoordFloat + FloatConst> BoundingRect<T> for CompoundCurve<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        merge(self.sections().iter().map(BoundingRect::bounding_rect))
    }
}

impl<T: CoordFloat + FloatConst> BoundingRect<T> for Curve<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        match self {
            Curve::LineString(g) => g.bounding_rect(),
            Curve::CircularString(g) => g.bounding_rect(),
            Curve::CompoundCurve(g) => g.bounding_rect(),
        }
    }
}

/// Interior rings lie within the exterior ring; only the exterior
/// contributes.
impl<T: CoordFloat + FloatConst> BoundingRect<T> for CurvePolygon<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        self.exterior().bounding_rect()
    }
}

impl<T: CoordFloat + FloatConst> BoundingRect<T> for MultiCurve<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        merge(self.iter().map(BoundingRect::bounding_rect))
    }
}

impl<T: CoordFloat + FloatConst> BoundingRect<T> for MultiSurface<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        merge(self.iter().map(BoundingRect::bounding_rect))
    }
}

impl<T: CoordFloat + FloatConst> BoundingRect<T> for CurvedGeometry<T> {
    fn bounding_rect(&self) -> Option<Rect<T>> {
        match self {
            CurvedGeometry::CircularString(g) => g.bounding_rect(),
            CurvedGeometry::CompoundCurve(g) => g.bounding_rect(),
            CurvedGeometry::CurvePolygon(g) => g.bounding_rect(),
            CurvedGeometry::MultiCurve(g) => g.bounding_rect(),
            CurvedGeometry::MultiSurface(g) => g.bounding_rect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn empty_geometries_have_no_envelope() {
        assert!(CircularString::<f64>::empty(Default::default())
            .bounding_rect()
            .is_none());
        assert!(CompoundCurve::<f64>::empty().bounding_rect().is_none());
        assert!(MultiCurve::<f64>::empty().bounding_rect().is_none());
    }

    #[test]
    fn control_point_envelope() {
        // arcs stay within their control points here
        let cs =
            CircularString::try_from(vec![(0., 0.), (1., 1.), (2., 0.), (3., -1.), (4., 0.)])
                .unwrap();
        let rect = cs.bounding_rect().unwrap();
        assert_eq!(rect.min(), coord! { x: 0.0, y: -1.0 });
        assert_eq!(rect.max(), coord! { x: 4.0, y: 1.0 });
    }

    #[test]
    fn arc_bulges_beyond_its_control_points() {
        // a three-quarter circle; the envelope reaches the east extreme
        // even though no control point does
        let cs = CircularString::try_from(vec![(-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)]).unwrap();
        let rect = cs.bounding_rect().unwrap();
        approx::assert_relative_eq!(rect.min().x, -1.0);
        approx::assert_relative_eq!(rect.min().y, -1.0);
        approx::assert_relative_eq!(rect.max().x, 1.0);
        approx::assert_relative_eq!(rect.max().y, 1.0);
    }
}
