use log::trace;
use num_traits::FloatConst;

use crate::algorithm::angles;
use crate::algorithm::arcs::Arcs;
use crate::algorithm::distance::point_distance;
use crate::{CircularArc, CircularString, Coord, CoordDimensions, CoordFloat, CoordZM};

/// Splits a string of arcs at intersection points.
///
/// Intersection points are accumulated with
/// [`add_intersection`](NodableArcString::add_intersection) and the split
/// is performed by [`get_noded`](NodableArcString::get_noded). Every output
/// arc is a true sub-arc of an input arc: its center, radius, and
/// orientation are the parent's, bit for bit, because sub-arcs are
/// constructed from the parent's derived circle rather than re-derived
/// from their own three points.
///
/// When the profile carries Z or M, each split point receives the linear
/// interpolation between the parent arc's endpoint values, weighted by its
/// angular fraction along the parent.
///
/// # Examples
///
/// ```
/// use geo_curved::noding::NodableArcString;
/// use geo_curved::{coord, CircularArc, CoordZM, Orientation};
///
/// // a CCW semicircle through the east pole
/// let arc = CircularArc::create(
///     CoordZM::new(0.0, -5.0),
///     CoordZM::new(5.0, 0.0),
///     CoordZM::new(0.0, 5.0),
/// );
/// let mut noder = NodableArcString::new(vec![arc], Default::default());
/// noder.add_intersection(coord! { x: 4.0, y: 3.0 }, 0);
/// noder.add_intersection(coord! { x: 4.0, y: -3.0 }, 0);
///
/// let noded = noder.get_noded();
/// assert_eq!(noded.len(), 3);
/// assert!(noded.iter().all(|a| a.orientation() == Orientation::CounterClockwise));
/// ```
pub struct NodableArcString<'a, T: CoordFloat> {
    arcs: Vec<CircularArc<'a, T>>,
    dims: CoordDimensions,
    intersections: Vec<Vec<Coord<T>>>,
}

impl<'a, T: CoordFloat + FloatConst> NodableArcString<'a, T> {
    /// A noder over the given arcs. `dims` declares the attribute profile
    /// used for interpolation at split points.
    pub fn new(arcs: Vec<CircularArc<'a, T>>, dims: CoordDimensions) -> Self {
        let buckets = vec![Vec::new(); arcs.len()];
        NodableArcString {
            arcs,
            dims,
            intersections: buckets,
        }
    }

    /// A noder over every arc of a [`CircularString`].
    pub fn from_circular_string(cs: &'a CircularString<T>) -> Self {
        let arcs: Vec<_> = cs.arcs().collect();
        let dims = cs.dims();
        NodableArcString::new(arcs, dims)
    }

    pub fn arcs(&self) -> &[CircularArc<'a, T>] {
        &self.arcs
    }

    /// Record an intersection point on the arc at `arc_index`. The point
    /// is assumed to lie on that arc. Points coinciding with an existing
    /// arc endpoint are discarded; they require no split.
    ///
    /// # Panics
    ///
    /// If `arc_index` is out of bounds.
    pub fn add_intersection(&mut self, point: Coord<T>, arc_index: usize) {
        let arc = &self.arcs[arc_index];
        if point == arc.p0() || point == arc.p2() {
            trace!("discarding intersection at an existing arc endpoint");
            return;
        }
        self.intersections[arc_index].push(point);
    }

    /// Split every arc at its recorded intersection points. Points are
    /// ordered along each arc in its direction of travel; each consecutive
    /// pair becomes one output arc on the parent's circle.
    pub fn get_noded(&self) -> Vec<CircularArc<'static, T>> {
        let mut noded = Vec::with_capacity(self.arcs.len());
        for (arc, points) in self.arcs.iter().zip(&self.intersections) {
            self.node_arc(arc, points, &mut noded);
        }
        noded
    }

    /// The offsets of `q` along `arc`, measured from both endpoints.
    ///
    /// Both offsets go through the same remainder expression, so the pair
    /// derived when traversing the reversed arc is exactly the swap of
    /// this one. Interpolation works from whichever endpoint is nearer,
    /// which keeps split-point attributes bit-identical under reversal.
    fn offsets_along(arc: &CircularArc<'_, T>, q: Coord<T>) -> (T, T) {
        if arc.is_linear() {
            (point_distance(arc.p0(), q), point_distance(q, arc.p2()))
        } else {
            let sweep = arc.sweep();
            let center = arc.center();
            let theta = angles::angle_of(q, center);
            (
                angles::angular_diff(arc.theta0(), theta, sweep).abs(),
                angles::angular_diff(theta, arc.theta2(), sweep).abs(),
            )
        }
    }

    /// Linear interpolation between the parent endpoints' attribute
    /// values, weighted by angular offset, from the nearer endpoint.
    fn interpolate(a: Option<T>, b: Option<T>, from_start: T, from_end: T) -> Option<T> {
        match (a, b) {
            (Some(a), Some(b)) => {
                let total = from_start + from_end;
                Some(if from_start <= from_end {
                    a + (b - a) * (from_start / total)
                } else {
                    b - (b - a) * (from_end / total)
                })
            }
            _ => None,
        }
    }

    fn node_arc(
        &self,
        arc: &CircularArc<'_, T>,
        points: &[Coord<T>],
        out: &mut Vec<CircularArc<'static, T>>,
    ) {
        if points.is_empty() {
            out.push(arc.to_owned_arc());
            return;
        }

        let mut ordered: Vec<((T, T), Coord<T>)> = points
            .iter()
            .map(|&q| (Self::offsets_along(arc, q), q))
            .collect();
        ordered.sort_by(|a, b| a.0 .0.partial_cmp(&b.0 .0).unwrap());
        ordered.dedup_by(|a, b| a.1 == b.1);

        let p0 = arc.p0_zm();
        let p2 = arc.p2_zm();
        let center = arc.center();
        let radius = arc.radius();
        let orientation = if arc.is_circle() {
            arc.sweep()
        } else {
            arc.orientation()
        };

        let mut prev = p0;
        for ((from_start, from_end), q) in ordered {
            trace!("splitting arc at offset {from_start:?}");
            let split = CoordZM {
                x: q.x,
                y: q.y,
                z: if self.dims.has_z {
                    Self::interpolate(p0.z, p2.z, from_start, from_end)
                } else {
                    None
                },
                m: if self.dims.has_m {
                    Self::interpolate(p0.m, p2.m, from_start, from_end)
                } else {
                    None
                },
            };
            out.push(CircularArc::create_with(
                prev,
                split,
                center,
                radius,
                orientation,
            ));
            prev = split;
        }
        out.push(CircularArc::create_with(prev, p2, center, radius, orientation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;
    use geo_curved_types::coord;

    fn check_add_points(
        arc: CircularArc<'static, f64>,
        coords: &[(f64, f64)],
        expected: &[CircularArc<'static, f64>],
    ) {
        check_add_points_inner(&arc, coords, expected);

        // the reversed input with the same points yields the reversed
        // output, arc by arc
        let rev_arc = arc.reverse();
        let mut rev_expected: Vec<_> = expected.iter().map(CircularArc::reverse).collect();
        rev_expected.reverse();
        check_add_points_inner(&rev_arc, coords, &rev_expected);
    }

    fn check_add_points_inner(
        arc: &CircularArc<'static, f64>,
        coords: &[(f64, f64)],
        expected: &[CircularArc<'static, f64>],
    ) {
        let mut noder = NodableArcString::new(vec![arc.clone()], arc.dims());
        for &(x, y) in coords {
            noder.add_intersection(coord! { x: x, y: y }, 0);
        }
        let noded = noder.get_noded();
        assert_eq!(noded.len(), expected.len());
        for (actual, expected) in noded.iter().zip(expected) {
            assert!(
                actual.equals(expected, 1e-8),
                "{actual:?} does not equal expected {expected:?}"
            );
        }
    }

    fn arc(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> CircularArc<'static, f64> {
        CircularArc::create(
            CoordZM::new(p0.0, p0.1),
            CoordZM::new(p1.0, p1.1),
            CoordZM::new(p2.0, p2.1),
        )
    }

    fn sub_arc(
        p0: (f64, f64),
        p2: (f64, f64),
        center: (f64, f64),
        radius: f64,
        orientation: Orientation,
    ) -> CircularArc<'static, f64> {
        CircularArc::create_with(
            CoordZM::new(p0.0, p0.1),
            CoordZM::new(p2.0, p2.1),
            coord! { x: center.0, y: center.1 },
            radius,
            orientation,
        )
    }

    #[test]
    fn cw_half_circle_upper_half_plane() {
        use Orientation::Clockwise;
        check_add_points(
            arc((-5.0, 0.0), (0.0, 5.0), (5.0, 0.0)),
            &[(4.0, 3.0), (3.0, 4.0), (-3.0, 4.0), (-4.0, 3.0)],
            &[
                sub_arc((-5.0, 0.0), (-4.0, 3.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((-4.0, 3.0), (-3.0, 4.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((-3.0, 4.0), (3.0, 4.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((3.0, 4.0), (4.0, 3.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((4.0, 3.0), (5.0, 0.0), (0.0, 0.0), 5.0, Clockwise),
            ],
        );
    }

    #[test]
    fn cw_half_circle_right_half_plane() {
        use Orientation::Clockwise;
        // (5, 0) coincides with an arc point but not an endpoint, so it
        // still splits
        check_add_points(
            arc((0.0, 5.0), (5.0, 0.0), (0.0, -5.0)),
            &[(4.0, -3.0), (4.0, 3.0), (3.0, -4.0), (3.0, 4.0), (5.0, 0.0)],
            &[
                sub_arc((0.0, 5.0), (3.0, 4.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((3.0, 4.0), (4.0, 3.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((4.0, 3.0), (5.0, 0.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((5.0, 0.0), (4.0, -3.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((4.0, -3.0), (3.0, -4.0), (0.0, 0.0), 5.0, Clockwise),
                sub_arc((3.0, -4.0), (0.0, -5.0), (0.0, 0.0), 5.0, Clockwise),
            ],
        );
    }

    #[test]
    fn ccw_semicircle_ordering() {
        use Orientation::CounterClockwise;
        check_add_points(
            arc((0.0, -5.0), (5.0, 0.0), (0.0, 5.0)),
            &[(4.0, 3.0), (4.0, -3.0), (3.0, 4.0), (3.0, -4.0), (5.0, 0.0)],
            &[
                sub_arc((0.0, -5.0), (3.0, -4.0), (0.0, 0.0), 5.0, CounterClockwise),
                sub_arc((3.0, -4.0), (4.0, -3.0), (0.0, 0.0), 5.0, CounterClockwise),
                sub_arc((4.0, -3.0), (5.0, 0.0), (0.0, 0.0), 5.0, CounterClockwise),
                sub_arc((5.0, 0.0), (4.0, 3.0), (0.0, 0.0), 5.0, CounterClockwise),
                sub_arc((4.0, 3.0), (3.0, 4.0), (0.0, 0.0), 5.0, CounterClockwise),
                sub_arc((3.0, 4.0), (0.0, 5.0), (0.0, 0.0), 5.0, CounterClockwise),
            ],
        );
    }

    #[test]
    fn no_points_added() {
        let input = arc((-1.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        check_add_points(input.clone(), &[], std::slice::from_ref(&input));
    }

    #[test]
    fn endpoint_intersections_are_discarded() {
        let input = arc((-1.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        let mut noder = NodableArcString::new(vec![input.clone()], input.dims());
        noder.add_intersection(coord! { x: -1.0, y: 0.0 }, 0);
        noder.add_intersection(coord! { x: 1.0, y: 0.0 }, 0);
        let noded = noder.get_noded();
        assert_eq!(noded.len(), 1);
        assert!(noded[0].equals(&input, 0.0));
    }

    #[test]
    fn duplicate_intersections_split_once() {
        let input = arc((-5.0, 0.0), (0.0, 5.0), (5.0, 0.0));
        let mut noder = NodableArcString::new(vec![input], CoordDimensions::xy());
        noder.add_intersection(coord! { x: 3.0, y: 4.0 }, 0);
        noder.add_intersection(coord! { x: 3.0, y: 4.0 }, 0);
        assert_eq!(noder.get_noded().len(), 2);
    }

    #[test]
    fn output_arcs_preserve_parent_circle_bitwise() {
        let input = arc((71.96, -65.64), (22.2, -18.52), (20.0, 50.0));
        let center = input.center();
        let radius = input.radius();

        let mut noder = NodableArcString::new(vec![input.clone()], CoordDimensions::xy());
        noder.add_intersection(input.midpoint(), 0);
        let noded = noder.get_noded();

        assert_eq!(noded.len(), 2);
        for sub in &noded {
            assert_eq!(sub.center(), center);
            assert_eq!(sub.radius(), radius);
            assert_eq!(sub.orientation(), input.orientation());
        }
        assert_eq!(noded[0].p2(), noded[1].p0());
    }

    #[test]
    fn multiple_arcs_use_the_supplied_index() {
        let cs =
            CircularString::try_from(vec![(0., 0.), (1., 1.), (2., 0.), (3., -1.), (4., 0.)])
                .unwrap();
        let mut noder = NodableArcString::from_circular_string(&cs);
        // the split point of each arc, by index
        noder.add_intersection(coord! { x: 1.0 - 0.5f64.sqrt(), y: 0.5f64.sqrt() }, 0);
        noder.add_intersection(coord! { x: 3.0 + 0.5f64.sqrt(), y: -(0.5f64.sqrt()) }, 1);

        let noded = noder.get_noded();
        assert_eq!(noded.len(), 4);
        assert_eq!(noded[0].p0(), coord! { x: 0.0, y: 0.0 });
        assert_eq!(noded[1].p2(), coord! { x: 2.0, y: 0.0 });
        assert_eq!(noded[2].p0(), coord! { x: 2.0, y: 0.0 });
        assert_eq!(noded[3].p2(), coord! { x: 4.0, y: 0.0 });
    }

    #[test]
    fn zm_interpolated_by_angular_fraction() {
        // quarter-way along a CCW quarter of the radius-5 circle
        let p0 = CoordZM::new(5.0, 0.0).with_z(6.0).with_m(2.0);
        let p1 = CoordZM::new(0.5f64.sqrt() * 5.0, 0.5f64.sqrt() * 5.0)
            .with_z(100.0)
            .with_m(100.0); // center-point attributes are unused
        let p2 = CoordZM::new(0.0, 5.0).with_z(9.0).with_m(1.0);
        let input = CircularArc::create(p0, p1, p2);

        let quarter = std::f64::consts::PI / 8.0;
        let mut noder = NodableArcString::new(vec![input], CoordDimensions::xyzm());
        noder.add_intersection(
            coord! { x: 5.0 * quarter.cos(), y: 5.0 * quarter.sin() },
            0,
        );

        let noded = noder.get_noded();
        assert_eq!(noded.len(), 2);
        let split = noded[0].p2_zm();
        assert!((split.z.unwrap() - 6.75).abs() < 1e-9);
        assert!((split.m.unwrap() - 1.75).abs() < 1e-9);

        // synthesized sub-arc midpoints average their endpoints
        assert!((noded[0].p1_zm().z.unwrap() - (6.0 + 6.75) / 2.0).abs() < 1e-9);
        assert!((noded[0].p1_zm().m.unwrap() - (2.0 + 1.75) / 2.0).abs() < 1e-9);
        assert!((noded[1].p1_zm().z.unwrap() - (6.75 + 9.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_arc_splits_along_the_chord() {
        let input = arc((0.0, 0.0), (2.0, 1.0), (4.0, 2.0));
        assert!(input.is_linear());

        let mut noder = NodableArcString::new(vec![input], CoordDimensions::xy());
        noder.add_intersection(coord! { x: 3.0, y: 1.5 }, 0);
        noder.add_intersection(coord! { x: 1.0, y: 0.5 }, 0);

        let noded = noder.get_noded();
        assert_eq!(noded.len(), 3);
        assert!(noded.iter().all(|a| a.is_linear()));
        assert_eq!(noded[0].p2(), coord! { x: 1.0, y: 0.5 });
        assert_eq!(noded[1].p2(), coord! { x: 3.0, y: 1.5 });
    }

    #[test]
    fn reversal_is_bit_identical_with_zm() {
        let p0 = CoordZM::new(0.0, 5.0).with_z(6.0);
        let p1 = CoordZM::new(5.0, 0.0).with_z(7.0);
        let p2 = CoordZM::new(4.0, -3.0).with_z(9.0);
        let input = CircularArc::create(p0, p1, p2);

        let points = [coord! { x: 3.0, y: 4.0 }, coord! { x: 5.0, y: 0.0 }];

        let mut fwd = NodableArcString::new(vec![input.clone()], CoordDimensions::xyz());
        let mut rev = NodableArcString::new(vec![input.reverse()], CoordDimensions::xyz());
        for q in points {
            fwd.add_intersection(q, 0);
            rev.add_intersection(q, 0);
        }

        let fwd_noded = fwd.get_noded();
        let mut rev_noded = rev.get_noded();
        rev_noded.reverse();

        assert_eq!(fwd_noded.len(), rev_noded.len());
        for (f, r) in fwd_noded.iter().zip(&rev_noded) {
            let r = r.reverse();
            assert_eq!(f.p0_zm(), r.p0_zm());
            assert_eq!(f.p1_zm(), r.p1_zm());
            assert_eq!(f.p2_zm(), r.p2_zm());
            assert_eq!(f.center(), r.center());
            assert_eq!(f.radius(), r.radius());
        }
    }
}
